//! # Denominations
//!
//! The fixed table of notes and coins the till can hand back.
//!
//! ## Table Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  hundred  fifty  twenty  ten  five  2dollars  1dollar  50c  20c  10c  5c │
//! │  10000    5000   2000    1000 500   200       100      50   20   10   5  │
//! │  ───────────────────────────────────────────────────────────────────►   │
//! │  strictly descending, all > 0, unique names, 5c present                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Greedy decomposition walks the table in declared order and never
//! re-sorts it, so the ordering is part of the contract.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Value of the smallest unit every table must carry.
pub const SMALLEST_UNIT: Money = Money::from_cents(5);

/// A named note or coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Denomination {
    /// Internal name used by tenders (`"2dollars"`, `"50cents"`).
    pub name: &'static str,

    /// Face value in cents.
    pub value: Money,
}

impl Denomination {
    pub const fn new(name: &'static str, value_cents: i64) -> Self {
        Denomination {
            name,
            value: Money::from_cents(value_cents),
        }
    }
}

/// The standard note and coin set, largest first.
pub const STANDARD_DENOMINATIONS: &[Denomination] = &[
    Denomination::new("hundred", 10_000),
    Denomination::new("fifty", 5_000),
    Denomination::new("twenty", 2_000),
    Denomination::new("ten", 1_000),
    Denomination::new("five", 500),
    Denomination::new("2dollars", 200),
    Denomination::new("1dollar", 100),
    Denomination::new("50cents", 50),
    Denomination::new("20cents", 20),
    Denomination::new("10cents", 10),
    Denomination::new("5cents", 5),
];

/// Looks up a denomination by its internal name.
///
/// ## Example
/// ```rust
/// use till_core::denomination::{find, STANDARD_DENOMINATIONS};
///
/// let two = find(STANDARD_DENOMINATIONS, "2dollars").unwrap();
/// assert_eq!(two.value.cents(), 200);
/// assert!(find(STANDARD_DENOMINATIONS, "threedollars").is_none());
/// ```
pub fn find<'a>(table: &'a [Denomination], name: &str) -> Option<&'a Denomination> {
    table.iter().find(|d| d.name == name)
}

/// Checks every table invariant.
///
/// ## Rules
/// - At least one denomination
/// - Every value strictly positive
/// - No duplicate names
/// - Values strictly descending in declared order
/// - Contains the 5-cent unit
pub fn validate_table(table: &[Denomination]) -> CoreResult<()> {
    if table.is_empty() {
        return Err(invalid("table is empty"));
    }

    let mut seen = HashSet::with_capacity(table.len());
    for denomination in table {
        if !denomination.value.is_positive() {
            return Err(invalid(format!(
                "{} has non-positive value {}",
                denomination.name, denomination.value
            )));
        }
        if !seen.insert(denomination.name) {
            return Err(invalid(format!("duplicate name {}", denomination.name)));
        }
    }

    if let Some(pair) = table.windows(2).find(|pair| pair[0].value <= pair[1].value) {
        return Err(invalid(format!(
            "{} ({}) is not larger than {} ({})",
            pair[0].name, pair[0].value, pair[1].name, pair[1].value
        )));
    }

    if !table.iter().any(|d| d.value == SMALLEST_UNIT) {
        return Err(invalid(format!("missing {} unit", SMALLEST_UNIT)));
    }

    Ok(())
}

fn invalid(reason: impl Into<String>) -> CoreError {
    CoreError::InvalidDenominationTable {
        reason: reason.into(),
    }
}
