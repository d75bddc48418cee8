//! # Commands
//!
//! One function per `till` subcommand. Each writes to the given sink so
//! tests can drive them without a terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  till compute --price 47.50 --tender fifty=1 ──► compute()              │
//! │  till session  (reads stdin line by line)    ──► session()              │
//! │  till denominations                          ──► denominations()        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, info};

use till_core::{ChangeEngine, ChangeResult, Money, Tender};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::render::{render_counters, render_denominations, render_summary};
use crate::session::{Session, SessionCommand};

/// JSON shape of a one-shot computation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeResponse {
    pub price: Money,
    pub total_paid: Money,
    pub result: ChangeResult,
}

/// Computes change once and prints it.
pub fn compute<W: Write>(
    config: &CliConfig,
    engine: ChangeEngine<'_>,
    price: Money,
    tenders: &[Tender],
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    debug!(%price, tenders = tenders.len(), json, "compute command");

    let total_paid = engine.total_tendered(tenders)?;
    let result = engine.change_for_total(price, total_paid)?;

    if json {
        let response = ChangeResponse {
            price,
            total_paid,
            result,
        };
        serde_json::to_writer_pretty(&mut *out, &response)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_summary(config, price, total_paid, &result))?;
    }

    Ok(())
}

/// Runs the interactive counter session until `quit` or end of input.
///
/// Bad lines are reported inline and the session keeps going.
pub fn session<R: BufRead, W: Write>(
    config: &CliConfig,
    engine: ChangeEngine<'_>,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    let mut session = Session::new(engine, config.default_price)?;
    info!(price = %session.price(), "Session started");

    write_summary(config, &session, out)?;

    for line in input.lines() {
        let line = line?;

        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                report_error(&e, out)?;
                continue;
            }
        };
        debug!(?command, "session command");

        if command == SessionCommand::Quit {
            break;
        }

        if let Err(e) = session.apply(&command) {
            report_error(&e, out)?;
            continue;
        }

        if command == SessionCommand::Show {
            write!(out, "{}", render_counters(session.counts()))?;
        }
        write_summary(config, &session, out)?;
    }

    info!("Session ended");
    Ok(())
}

/// Lists the denomination table with labels and values.
pub fn denominations<W: Write>(
    config: &CliConfig,
    engine: ChangeEngine<'_>,
    out: &mut W,
) -> Result<(), CliError> {
    write!(out, "{}", render_denominations(config, engine.table()))?;
    Ok(())
}

fn write_summary<W: Write>(
    config: &CliConfig,
    session: &Session<'_>,
    out: &mut W,
) -> Result<(), CliError> {
    match session.compute() {
        Ok((total_paid, result)) => {
            write!(out, "{}", render_summary(config, session.price(), total_paid, &result))?;
        }
        Err(e) => report_error(&e, out)?,
    }
    Ok(())
}

fn report_error<W: Write>(err: &CliError, out: &mut W) -> Result<(), CliError> {
    writeln!(out, "error [{}]: {}", err.code().as_str(), err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> String {
        let mut out = Vec::new();
        session(
            &CliConfig::default(),
            ChangeEngine::standard(),
            Cursor::new(script.to_string()),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_compute_text() {
        let mut out = Vec::new();
        compute(
            &CliConfig::default(),
            ChangeEngine::standard(),
            Money::from_cents(1995),
            &[Tender::new("twenty", 1)],
            false,
            &mut out,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Purchase Amount: $19.95\nTotal Paid: $20.00\nChange Due:\n  1 x 5c\n"
        );
    }

    #[test]
    fn test_compute_json() {
        let mut out = Vec::new();
        compute(
            &CliConfig::default(),
            ChangeEngine::standard(),
            Money::from_cents(10_000),
            &[Tender::new("hundred", 1)],
            true,
            &mut out,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["price"], 10_000);
        assert_eq!(value["totalPaid"], 10_000);
        assert_eq!(value["result"]["kind"], "exact");
    }

    #[test]
    fn test_compute_rejects_negative_count() {
        let mut out = Vec::new();
        let err = compute(
            &CliConfig::default(),
            ChangeEngine::standard(),
            Money::zero(),
            &[Tender::new("ten", -1)],
            false,
            &mut out,
        )
        .unwrap_err();

        assert_eq!(err.code().as_str(), "VALIDATION_ERROR");
        assert!(out.is_empty());
    }

    #[test]
    fn test_session_flow() {
        let output = run_session("price 47.50\n+ fifty\nquit\n+ fifty\n");

        assert!(output.starts_with(
            "Purchase Amount: $100.00\nTotal Paid: $0.00\nThe amount given is less than the price\n"
        ));
        assert!(output.ends_with(
            "Purchase Amount: $47.50\nTotal Paid: $50.00\nChange Due:\n  1 x $2\n  1 x 50c\n"
        ));
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let output = run_session("+ doubloon\nprice -1\nset ten 1\n");

        assert!(output.contains("error [INPUT_ERROR]: Unknown denomination: doubloon\n"));
        assert!(output.contains("error [VALIDATION_ERROR]: price must not be negative (got -100)\n"));
        assert!(output.ends_with("Total Paid: $10.00\nThe amount given is less than the price\nStill owed: $90.00\n"));
    }

    #[test]
    fn test_session_clear_and_show() {
        let output = run_session("+ twenty\nclear\nshow\n");

        assert!(output.contains("  $20: 0\n"));
        assert!(output.ends_with("Purchase Amount: $0.00\nTotal Paid: $0.00\nCorrect amount given\n"));
    }

    #[test]
    fn test_denominations() {
        let mut out = Vec::new();
        denominations(&CliConfig::default(), ChangeEngine::standard(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 11);
        assert!(text.contains("2dollars      $2     $2.00\n"));
    }
}
