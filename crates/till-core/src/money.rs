//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Greedy change in floating point:                                       │
//! │    2.5 - 2 - 0.5 = 0 ... but 0.3 - 0.2 - 0.1 = -2.7e-17  ❌            │
//! │    Rounding after every step hides the drift, it does not remove it.   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    250 - 200 - 50 = 0 cents, always                                    │
//! │    Every denomination value is an exact cent count                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//!
//! let price: Money = "47.50".parse().unwrap();
//! assert_eq!(price.cents(), 4750);
//!
//! let change = Money::from_cents(5000) - price;
//! assert_eq!(change.to_string(), "$2.50");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative input must be representable so it can be
///   rejected with a clear error instead of wrapping
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// Denomination.value ──► Tender count × value ──► total tendered
///                                                      │
/// price ───────────────────────────────────────────────┤
///                                                      ▼
///                                 difference ──► greedy breakdown
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_cents(1995); // $19.95
    /// assert_eq!(price.cents(), 1995);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount to cents, rounding to the nearest cent.
    ///
    /// ## Rounding Policy
    /// Round half up (midpoint away from zero), applied exactly once, here.
    /// Everything downstream is integer cents, so there is no second rounding
    /// step and no drift.
    ///
    /// ```text
    /// 19.954  → 1995
    /// 19.955  → 1996   (midpoint goes up)
    /// -0.005  → -1     (away from zero)
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use till_core::money::Money;
    ///
    /// let amount = Decimal::new(33_335, 3); // 33.335
    /// assert_eq!(Money::from_decimal(amount).unwrap().cents(), 3334);
    /// ```
    pub fn from_decimal(amount: Decimal) -> Result<Self, ValidationError> {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let cents = rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|c| c.to_i64())
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "amount".to_string(),
                min: i64::MIN,
                max: i64::MAX,
            })?;
        Ok(Money(cents))
    }

    /// Returns the amount as a two-decimal `Decimal`.
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollars portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Addition that reports overflow instead of wrapping.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies by a unit count, reporting overflow instead of wrapping.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let fifty = Money::from_cents(5000);
    /// assert_eq!(fifty.checked_mul(3), Some(Money::from_cents(15000)));
    /// assert_eq!(fifty.checked_mul(i64::MAX), None);
    /// ```
    #[inline]
    pub const fn checked_mul(self, count: i64) -> Option<Money> {
        match self.0.checked_mul(count) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$D.CC`.
///
/// ## Note
/// This is for logs and debugging. The front end owns currency formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Parses `"47.50"`, `"$47.50"` or `"100"`.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let amount = Decimal::from_str(digits).map_err(|e| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: e.to_string(),
        })?;

        Money::from_decimal(amount)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a unit count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
