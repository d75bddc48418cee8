//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Engine / table failures                        │
//! │  └── ValidationError  - Input contract violations                      │
//! │                                                                         │
//! │  till-cli errors (app crate)                                           │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT an error
//! - Tendering less than the price is a normal outcome
//!   ([`ChangeResult::Insufficient`](crate::change::ChangeResult)).
//! - A tender naming an unknown denomination is a logged warning; it
//!   contributes nothing to the total.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The denomination table breaks one of its invariants.
    ///
    /// ## When This Occurs
    /// - Values not strictly descending
    /// - Zero or negative value
    /// - Duplicate names
    /// - No 5-cent unit
    #[error("Invalid denomination table: {reason}")]
    InvalidDenominationTable { reason: String },

    /// A running total left the `i64` cent range.
    #[error("Amount overflow while summing {field}")]
    AmountOverflow { field: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at the boundary, before any change math runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative (got {value})")]
    MustBeNonNegative { field: String, value: i64 },

    /// Invalid format (e.g., "12.x" as an amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
