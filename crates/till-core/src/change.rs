//! # Change Engine
//!
//! Works out the change owed for a purchase and breaks it into notes and
//! coins.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  price: $47.50          tenders: [fifty × 1]                            │
//! │       │                        │                                        │
//! │       │                        ▼                                        │
//! │       │              total_tendered() ── unknown name? warn, count 0    │
//! │       │                        │                                        │
//! │       └──────────┬─────────────┘                                        │
//! │                  ▼                                                      │
//! │   total < price ──► Insufficient { shortfall }                          │
//! │   total = price ──► Exact                                               │
//! │   total > price ──► greedy over table (largest first)                   │
//! │                        │                                                │
//! │                        ▼                                                │
//! │          Breakdown { [2dollars × 1, 50cents × 1], remainder: $0.00 }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//! The engine only borrows an immutable table. Every call is independent,
//! so one engine can be shared across threads without locking.
//!
//! ## Example
//! ```rust
//! use till_core::change::{ChangeEngine, ChangeResult, Tender};
//! use till_core::money::Money;
//!
//! let engine = ChangeEngine::standard();
//! let result = engine
//!     .compute_change(Money::from_cents(1995), &[Tender::new("twenty", 1)])
//!     .unwrap();
//!
//! match result {
//!     ChangeResult::Breakdown { entries, .. } => {
//!         assert_eq!(entries.len(), 1);
//!         assert_eq!(entries[0].denomination, "5cents");
//!     }
//!     other => panic!("expected change, got {:?}", other),
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::denomination::{self, validate_table, Denomination, STANDARD_DENOMINATIONS};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_price, validate_tender_count};

/// Message returned when the tendered total is below the price.
pub const INSUFFICIENT_MESSAGE: &str = "The amount given is less than the price";

/// Message returned when the tendered total matches the price.
pub const EXACT_MESSAGE: &str = "Correct amount given";

// =============================================================================
// Input / Output Types
// =============================================================================

/// Units of one denomination handed over by the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Tender {
    /// Internal denomination name (`"fifty"`, `"5cents"`).
    pub denomination: String,

    /// Number of units. Signed so that a negative count from the front end
    /// reaches validation instead of failing deserialization.
    pub count: i64,
}

impl Tender {
    pub fn new(denomination: impl Into<String>, count: i64) -> Self {
        Tender {
            denomination: denomination.into(),
            count,
        }
    }
}

/// One line of a change breakdown. `count` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChangeEntry {
    pub denomination: String,
    pub count: i64,
}

/// Outcome of a change computation.
///
/// ## Serialization
/// ```json
/// { "kind": "insufficient", "message": "...", "shortfall": 250 }
/// { "kind": "exact", "message": "Correct amount given" }
/// { "kind": "breakdown", "entries": [{ "denomination": "2dollars", "count": 1 }], "remainder": 0 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum ChangeResult {
    /// Tendered total is below the price.
    Insufficient { message: String, shortfall: Money },

    /// Tendered total equals the price. No change due.
    Exact { message: String },

    /// Change is due.
    ///
    /// `entries` follow the table order (largest value first).
    /// `remainder` is whatever the table could not express; it is zero
    /// whenever the difference is a multiple of the smallest unit.
    Breakdown {
        entries: Vec<ChangeEntry>,
        remainder: Money,
    },
}

impl ChangeResult {
    fn insufficient(shortfall: Money) -> Self {
        ChangeResult::Insufficient {
            message: INSUFFICIENT_MESSAGE.to_string(),
            shortfall,
        }
    }

    fn exact() -> Self {
        ChangeResult::Exact {
            message: EXACT_MESSAGE.to_string(),
        }
    }

    /// Returns the user-facing message, if this outcome carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ChangeResult::Insufficient { message, .. } | ChangeResult::Exact { message } => {
                Some(message)
            }
            ChangeResult::Breakdown { .. } => None,
        }
    }

    /// Reconstructs `sum(count × value)` of the breakdown against `table`.
    ///
    /// Zero for `Insufficient` and `Exact`. Entry names missing from `table`
    /// contribute zero.
    pub fn change_total(&self, table: &[Denomination]) -> Money {
        match self {
            ChangeResult::Breakdown { entries, .. } => entries
                .iter()
                .filter_map(|e| denomination::find(table, &e.denomination).map(|d| d.value * e.count))
                .fold(Money::zero(), |acc, m| acc + m),
            _ => Money::zero(),
        }
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Computes change against a validated denomination table.
#[derive(Debug, Clone, Copy)]
pub struct ChangeEngine<'a> {
    table: &'a [Denomination],
}

impl<'a> ChangeEngine<'a> {
    /// Creates an engine over `table` after checking its invariants.
    pub fn new(table: &'a [Denomination]) -> CoreResult<Self> {
        validate_table(table)?;
        Ok(ChangeEngine { table })
    }

    /// The denomination table this engine decomposes into.
    pub fn table(&self) -> &'a [Denomination] {
        self.table
    }

    /// Sums `count × value` over all tenders.
    ///
    /// ## Behavior
    /// - Unknown denomination name: contributes zero, logged at warn
    /// - Negative count: rejected with a validation error
    /// - Overflow of the cent total: rejected with `AmountOverflow`
    pub fn total_tendered(&self, tenders: &[Tender]) -> CoreResult<Money> {
        let mut total = Money::zero();

        for tender in tenders {
            validate_tender_count(&tender.denomination, tender.count)?;

            let Some(denomination) = denomination::find(self.table, &tender.denomination) else {
                warn!(
                    denomination = %tender.denomination,
                    count = tender.count,
                    "Tender references unknown denomination, ignoring it"
                );
                continue;
            };

            total = denomination
                .value
                .checked_mul(tender.count)
                .and_then(|amount| total.checked_add(amount))
                .ok_or_else(|| CoreError::AmountOverflow {
                    field: "tendered total".to_string(),
                })?;
        }

        Ok(total)
    }

    /// Compares the tendered total with `price` and breaks any excess into
    /// the fewest units a greedy walk of the table finds.
    ///
    /// ## Errors
    /// Only input contract violations: negative price, negative count, or a
    /// total that overflows. Insufficient payment is a normal result.
    pub fn compute_change(&self, price: Money, tenders: &[Tender]) -> CoreResult<ChangeResult> {
        validate_price(price)?;
        let total = self.total_tendered(tenders)?;
        self.change_for_total(price, total)
    }

    /// Same as [`compute_change`](Self::compute_change) for a total already
    /// obtained from [`total_tendered`](Self::total_tendered).
    ///
    /// Callers that show the total paid next to the change use this so the
    /// tenders are summed, and unknown names reported, once.
    pub fn change_for_total(&self, price: Money, total: Money) -> CoreResult<ChangeResult> {
        validate_price(price)?;
        if total.is_negative() {
            return Err(ValidationError::MustBeNonNegative {
                field: "tendered total".to_string(),
                value: total.cents(),
            }
            .into());
        }

        if total < price {
            debug!(%price, %total, "Tendered amount below price");
            return Ok(ChangeResult::insufficient(price - total));
        }

        if total == price {
            debug!(%price, "Exact amount tendered");
            return Ok(ChangeResult::exact());
        }

        let difference = total - price;
        let mut remaining = difference;
        let mut entries = Vec::new();

        for denomination in self.table {
            if remaining < denomination.value {
                continue;
            }

            let count = remaining.cents() / denomination.value.cents();
            if count > 0 {
                entries.push(ChangeEntry {
                    denomination: denomination.name.to_string(),
                    count,
                });
                remaining -= denomination.value * count;
            }
        }

        if !remaining.is_zero() {
            warn!(
                %price,
                %total,
                %difference,
                %remaining,
                "Change cannot be fully expressed in available denominations"
            );
        }

        debug!(%price, %total, %difference, lines = entries.len(), "Change computed");

        Ok(ChangeResult::Breakdown {
            entries,
            remainder: remaining,
        })
    }
}

impl ChangeEngine<'static> {
    /// Engine over [`STANDARD_DENOMINATIONS`].
    pub const fn standard() -> Self {
        ChangeEngine {
            table: STANDARD_DENOMINATIONS,
        }
    }
}

impl Default for ChangeEngine<'static> {
    fn default() -> Self {
        ChangeEngine::standard()
    }
}

/// Computes change against the standard denomination table.
pub fn compute_change(price: Money, tenders: &[Tender]) -> CoreResult<ChangeResult> {
    ChangeEngine::standard().compute_change(price, tenders)
}

// =============================================================================
// Unit Tests
// =============================================================================
