//! Text rendering of counters and change results.
//!
//! ```text
//! Purchase Amount: $47.50
//! Total Paid: $50.00
//! Change Due:
//!   1 x $2
//!   1 x 50c
//! ```

use std::fmt::Write;

use till_core::{ChangeResult, Denomination, Money};

use crate::config::CliConfig;
use crate::labels::display_label;
use crate::tender::TenderCounts;

/// Renders the outcome block: a message, or "Change Due:" and its lines.
pub fn render_result(config: &CliConfig, result: &ChangeResult) -> String {
    let mut out = String::new();

    if let Some(message) = result.message() {
        let _ = writeln!(out, "{}", message);
    }

    match result {
        ChangeResult::Insufficient { shortfall, .. } => {
            let _ = writeln!(out, "Still owed: {}", config.format_currency(*shortfall));
        }
        ChangeResult::Exact { .. } => {}
        ChangeResult::Breakdown { entries, remainder } => {
            let _ = writeln!(out, "Change Due:");
            for entry in entries {
                let _ = writeln!(out, "  {} x {}", entry.count, display_label(&entry.denomination));
            }
            if !remainder.is_zero() {
                let _ = writeln!(
                    out,
                    "Unrepresentable remainder: {}",
                    config.format_currency(*remainder)
                );
            }
        }
    }

    out
}

/// Renders the purchase amount, total paid and outcome.
pub fn render_summary(
    config: &CliConfig,
    price: Money,
    total_paid: Money,
    result: &ChangeResult,
) -> String {
    format!(
        "Purchase Amount: {}\nTotal Paid: {}\n{}",
        config.format_currency(price),
        config.format_currency(total_paid),
        render_result(config, result)
    )
}

/// Renders one `label: count` line per counter.
pub fn render_counters(counts: &TenderCounts<'_>) -> String {
    let mut out = String::new();
    for (denomination, count) in counts.iter() {
        let _ = writeln!(out, "{:>5}: {}", display_label(denomination.name), count);
    }
    out
}

/// Renders the denomination table: internal name, label, value.
pub fn render_denominations(config: &CliConfig, table: &[Denomination]) -> String {
    let mut out = String::new();
    for denomination in table {
        let _ = writeln!(
            out,
            "{:<10} {:>5} {:>9}",
            denomination.name,
            display_label(denomination.name),
            config.format_currency(denomination.value)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use till_core::{compute_change, Tender, STANDARD_DENOMINATIONS};

    #[test]
    fn test_render_breakdown() {
        let config = CliConfig::default();
        let result = compute_change(Money::from_cents(4750), &[Tender::new("fifty", 1)]).unwrap();

        assert_eq!(
            render_summary(&config, Money::from_cents(4750), Money::from_cents(5000), &result),
            "Purchase Amount: $47.50\nTotal Paid: $50.00\nChange Due:\n  1 x $2\n  1 x 50c\n"
        );
    }

    #[test]
    fn test_render_messages() {
        let config = CliConfig::default();

        let exact = compute_change(Money::zero(), &[]).unwrap();
        assert_eq!(render_result(&config, &exact), "Correct amount given\n");

        let short = compute_change(Money::from_cents(10_000), &[Tender::new("fifty", 1)]).unwrap();
        assert_eq!(
            render_result(&config, &short),
            "The amount given is less than the price\nStill owed: $50.00\n"
        );
    }

    #[test]
    fn test_render_remainder() {
        let config = CliConfig::default();
        let result = compute_change(Money::from_cents(3333), &[Tender::new("fifty", 1)]).unwrap();
        let text = render_result(&config, &result);

        assert!(text.starts_with("Change Due:\n  1 x $10\n"));
        assert!(text.ends_with("  1 x 5c\nUnrepresentable remainder: $0.02\n"));
    }

    #[test]
    fn test_render_counters_and_table() {
        let mut counts = TenderCounts::new(STANDARD_DENOMINATIONS);
        counts.set("fifty", 2).unwrap();
        let text = render_counters(&counts);
        assert!(text.contains("  $50: 2\n"));
        assert_eq!(text.lines().count(), 11);

        let table = render_denominations(&CliConfig::default(), STANDARD_DENOMINATIONS);
        assert!(table.starts_with("hundred     $100   $100.00\n"));
        assert!(table.contains("5cents        5c     $0.05\n"));
    }
}
