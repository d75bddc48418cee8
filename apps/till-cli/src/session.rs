//! # Till Session
//!
//! Purchase amount plus tender counters, as an explicit value.
//!
//! Every recompute hands a snapshot (`price`, `to_tenders()`) to the pure
//! engine; the engine never sees the session itself.
//!
//! ## Line Protocol
//! ```text
//! price 47.50        set the purchase amount
//! + fifty            one more $50 (also: add fifty)
//! - fifty            one fewer $50, never below zero (also: remove fifty)
//! set ten 3          set the $10 counter
//! clear              zero every counter and the purchase amount
//! show               print counters and change
//! quit               end the session (also: exit)
//! ```

use till_core::validation::validate_price;
use till_core::{ChangeEngine, ChangeResult, Money};

use crate::error::CliError;
use crate::tender::TenderCounts;

/// A parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Price(Money),
    Add(String),
    Remove(String),
    Set(String, i64),
    Clear,
    Show,
    Quit,
}

impl SessionCommand {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CliError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        let command = match (verb, args.as_slice()) {
            ("price", [amount]) => SessionCommand::Price(amount.parse()?),
            ("+" | "add", [name]) => SessionCommand::Add(name.to_string()),
            ("-" | "remove", [name]) => SessionCommand::Remove(name.to_string()),
            ("set", [name, count]) => {
                let count = count.parse::<i64>().map_err(|_| {
                    CliError::input(format!("count must be a whole number, got '{}'", count))
                })?;
                SessionCommand::Set(name.to_string(), count)
            }
            ("clear", []) => SessionCommand::Clear,
            ("show", []) => SessionCommand::Show,
            ("quit" | "exit", []) => SessionCommand::Quit,
            _ => return Err(CliError::input(format!("unrecognized command '{}'", line))),
        };

        Ok(Some(command))
    }
}

/// The till screen's state.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    engine: ChangeEngine<'a>,
    price: Money,
    counts: TenderCounts<'a>,
}

impl<'a> Session<'a> {
    /// Starts a session with zeroed counters.
    pub fn new(engine: ChangeEngine<'a>, price: Money) -> Result<Self, CliError> {
        validate_price(price)?;
        Ok(Session {
            engine,
            price,
            counts: TenderCounts::new(engine.table()),
        })
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn counts(&self) -> &TenderCounts<'a> {
        &self.counts
    }

    pub fn counts_mut(&mut self) -> &mut TenderCounts<'a> {
        &mut self.counts
    }

    pub fn set_price(&mut self, price: Money) -> Result<(), CliError> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    /// Zeroes every counter and the purchase amount.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.price = Money::zero();
    }

    /// Sum of everything tendered so far.
    pub fn total_paid(&self) -> Result<Money, CliError> {
        Ok(self.engine.total_tendered(&self.counts.to_tenders())?)
    }

    /// Runs the engine on the current snapshot.
    ///
    /// Returns the total paid alongside the result; the tenders are summed
    /// once for both.
    pub fn compute(&self) -> Result<(Money, ChangeResult), CliError> {
        let total_paid = self.total_paid()?;
        let result = self.engine.change_for_total(self.price, total_paid)?;
        Ok((total_paid, result))
    }

    /// Applies a state-changing command.
    ///
    /// `Show` and `Quit` leave the state alone; callers handle them.
    pub fn apply(&mut self, command: &SessionCommand) -> Result<(), CliError> {
        match command {
            SessionCommand::Price(price) => self.set_price(*price)?,
            SessionCommand::Add(name) => {
                self.counts.increment(name)?;
            }
            SessionCommand::Remove(name) => {
                self.counts.decrement(name)?;
            }
            SessionCommand::Set(name, count) => self.counts.set(name, *count)?,
            SessionCommand::Clear => self.clear(),
            SessionCommand::Show | SessionCommand::Quit => {}
        }
        Ok(())
    }
}
