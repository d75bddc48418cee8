//! # Validation Module
//!
//! Boundary checks run before any change math.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (till-cli)                                         │
//! │  ├── Amount parsing ("47.50" → 4750 cents)                             │
//! │  └── `name=count` argument parsing                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: ChangeEngine (till-core)                                     │
//! │  └── THIS MODULE: price / count / name rules                           │
//! │                                                                         │
//! │  Anything that fails here is rejected, never silently clamped.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//! use till_core::validation::{validate_price, validate_tender_count};
//!
//! assert!(validate_price(Money::from_cents(4750)).is_ok());
//! assert!(validate_tender_count("fifty", -1).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest denomination name accepted at the boundary.
pub const MAX_DENOMINATION_NAME_LEN: usize = 32;

/// Validates a purchase price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (nothing to pay)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
            value: price.cents(),
        });
    }

    Ok(())
}

/// Validates how many units of one denomination were handed over.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is the default for every denomination
pub fn validate_tender_count(denomination: &str, count: i64) -> ValidationResult<()> {
    if count < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: format!("count of {}", denomination),
            value: count,
        });
    }

    Ok(())
}

/// Validates a denomination name as typed by a caller.
///
/// ## Rules
/// - Must not be empty
/// - At most 32 characters
/// - ASCII letters and digits only (`2dollars`, `50cents`)
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_denomination_name;
///
/// assert!(validate_denomination_name("2dollars").is_ok());
/// assert!(validate_denomination_name("").is_err());
/// assert!(validate_denomination_name("fifty bucks").is_err());
/// ```
pub fn validate_denomination_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "denomination".to_string(),
        });
    }

    if name.len() > MAX_DENOMINATION_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "denomination".to_string(),
            max: MAX_DENOMINATION_NAME_LEN,
        });
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "denomination".to_string(),
            reason: "must contain only letters and digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
