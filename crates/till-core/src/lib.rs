//! # till-core: Pure Change Logic for Till
//!
//! This crate is the **heart** of Till. It owns the denomination table and
//! the change computation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Till Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Front end (till-cli, web, ...)                 │   │
//! │  │   price input ──► tender counters ──► change display            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ price + [Tender]                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌──────────────┐  ┌──────────┐  ┌───────────┐ │   │
//! │  │   │   money   │  │ denomination │  │  change  │  │ validation│ │   │
//! │  │   │   Money   │  │    table     │  │  Engine  │  │   rules   │ │   │
//! │  │   └───────────┘  └──────────────┘  └──────────┘  └───────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • NO FLOATING POINT                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`denomination`] - The fixed note/coin table and its invariants
//! - [`change`] - `ChangeEngine`: tendered total, outcome, greedy breakdown
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary validation
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{compute_change, ChangeResult, Money, Tender};
//!
//! let price: Money = "47.50".parse().unwrap();
//! let result = compute_change(price, &[Tender::new("fifty", 1)]).unwrap();
//!
//! if let ChangeResult::Breakdown { entries, remainder } = result {
//!     assert_eq!(entries[0].denomination, "2dollars");
//!     assert_eq!(entries[1].denomination, "50cents");
//!     assert!(remainder.is_zero());
//! }
//! ```

pub mod change;
pub mod denomination;
pub mod error;
pub mod money;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use change::{compute_change, ChangeEngine, ChangeEntry, ChangeResult, Tender};
pub use denomination::{Denomination, STANDARD_DENOMINATIONS};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
