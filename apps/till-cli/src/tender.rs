//! # Tender Counters
//!
//! One counter per denomination, the way the till screen shows them.
//!
//! ## Counter Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User action          Method              Counter change                │
//! │  ───────────          ──────              ──────────────                │
//! │  "+ fifty"  ────────► increment() ──────► fifty += 1                    │
//! │  "- fifty"  ────────► decrement() ──────► fifty -= 1 (never below 0)    │
//! │  "set ten 3" ───────► set() ────────────► ten = 3                       │
//! │  "clear"    ────────► clear() ──────────► all = 0                       │
//! │                                                                         │
//! │  to_tenders() ──► [Tender] handed to the engine on every recompute      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use till_core::validation::{validate_denomination_name, validate_tender_count};
use till_core::{Denomination, Tender};

use crate::error::CliError;

/// Per-denomination counts, in table order. All start at zero.
#[derive(Debug, Clone)]
pub struct TenderCounts<'a> {
    table: &'a [Denomination],
    counts: Vec<i64>,
}

impl<'a> TenderCounts<'a> {
    /// Creates a zeroed counter for every denomination in `table`.
    pub fn new(table: &'a [Denomination]) -> Self {
        TenderCounts {
            table,
            counts: vec![0; table.len()],
        }
    }

    fn index_of(&self, name: &str) -> Result<usize, CliError> {
        self.table
            .iter()
            .position(|d| d.name == name)
            .ok_or_else(|| CliError::UnknownDenomination(name.to_string()))
    }

    /// Adds one unit. Returns the new count.
    pub fn increment(&mut self, name: &str) -> Result<i64, CliError> {
        let i = self.index_of(name)?;
        self.counts[i] = self.counts[i].saturating_add(1);
        Ok(self.counts[i])
    }

    /// Removes one unit, stopping at zero. Returns the new count.
    pub fn decrement(&mut self, name: &str) -> Result<i64, CliError> {
        let i = self.index_of(name)?;
        self.counts[i] = (self.counts[i] - 1).max(0);
        Ok(self.counts[i])
    }

    /// Sets a counter directly. Negative counts are rejected.
    pub fn set(&mut self, name: &str, count: i64) -> Result<(), CliError> {
        let i = self.index_of(name)?;
        validate_tender_count(name, count)?;
        self.counts[i] = count;
        Ok(())
    }

    /// Resets every counter to zero.
    pub fn clear(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
    }

    /// Current count for `name`, if the table has it.
    pub fn count(&self, name: &str) -> Option<i64> {
        self.index_of(name).ok().map(|i| self.counts[i])
    }

    /// Iterates `(denomination, count)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a Denomination, i64)> + '_ {
        self.table.iter().zip(self.counts.iter().copied())
    }

    /// One tender per denomination, zeros included.
    pub fn to_tenders(&self) -> Vec<Tender> {
        self.iter()
            .map(|(d, count)| Tender::new(d.name, count))
            .collect()
    }
}

/// Parses a `name=count` argument (`fifty=2`). A bare `name` means one unit.
///
/// The name is not checked against the table here; unknown names go to the
/// engine, which ignores them with a warning.
pub fn parse_tender_arg(arg: &str) -> Result<Tender, CliError> {
    let (name, count) = match arg.split_once('=') {
        Some((name, raw)) => {
            let count = raw.trim().parse::<i64>().map_err(|_| {
                CliError::input(format!("count for {} must be a whole number, got '{}'", name.trim(), raw.trim()))
            })?;
            (name.trim(), count)
        }
        None => (arg.trim(), 1),
    };

    validate_denomination_name(name)?;
    Ok(Tender::new(name, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use till_core::STANDARD_DENOMINATIONS;

    #[test]
    fn test_counters_start_at_zero() {
        let counts = TenderCounts::new(STANDARD_DENOMINATIONS);
        assert!(counts.iter().all(|(_, c)| c == 0));
        assert_eq!(counts.to_tenders().len(), STANDARD_DENOMINATIONS.len());
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut counts = TenderCounts::new(STANDARD_DENOMINATIONS);
        assert_eq!(counts.increment("fifty").unwrap(), 1);
        assert_eq!(counts.increment("fifty").unwrap(), 2);
        assert_eq!(counts.decrement("fifty").unwrap(), 1);
        assert_eq!(counts.count("fifty"), Some(1));
    }

    #[test]
    fn test_decrement_floors_at_zero() {
        let mut counts = TenderCounts::new(STANDARD_DENOMINATIONS);
        assert_eq!(counts.decrement("5cents").unwrap(), 0);
        assert_eq!(counts.count("5cents"), Some(0));
    }

    #[test]
    fn test_unknown_denomination() {
        let mut counts = TenderCounts::new(STANDARD_DENOMINATIONS);
        assert!(matches!(
            counts.increment("doubloon"),
            Err(CliError::UnknownDenomination(_))
        ));
        assert_eq!(counts.count("doubloon"), None);
    }

    #[test]
    fn test_set_rejects_negative() {
        let mut counts = TenderCounts::new(STANDARD_DENOMINATIONS);
        counts.set("ten", 3).unwrap();
        assert_eq!(counts.count("ten"), Some(3));
        assert!(matches!(counts.set("ten", -1), Err(CliError::Validation(_))));
        assert_eq!(counts.count("ten"), Some(3));
    }

    #[test]
    fn test_clear() {
        let mut counts = TenderCounts::new(STANDARD_DENOMINATIONS);
        counts.set("hundred", 2).unwrap();
        counts.increment("5cents").unwrap();
        counts.clear();
        assert!(counts.iter().all(|(_, c)| c == 0));
    }

    #[test]
    fn test_to_tenders_follows_table_order() {
        let mut counts = TenderCounts::new(STANDARD_DENOMINATIONS);
        counts.set("twenty", 1).unwrap();
        let tenders = counts.to_tenders();
        assert_eq!(tenders[0], Tender::new("hundred", 0));
        assert_eq!(tenders[2], Tender::new("twenty", 1));
        assert_eq!(tenders[10], Tender::new("5cents", 0));
    }

    #[test]
    fn test_parse_tender_arg() {
        assert_eq!(parse_tender_arg("fifty=2").unwrap(), Tender::new("fifty", 2));
        assert_eq!(parse_tender_arg(" twenty ").unwrap(), Tender::new("twenty", 1));
        assert_eq!(parse_tender_arg("ten=-1").unwrap(), Tender::new("ten", -1));

        assert!(matches!(parse_tender_arg("ten=x"), Err(CliError::Input(_))));
        assert!(matches!(parse_tender_arg("=2"), Err(CliError::Validation(_))));
    }
}
