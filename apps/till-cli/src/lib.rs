//! # till-cli
//!
//! Terminal front end for the Till change calculator.
//!
//! ## Module Organization
//! ```text
//! till_cli/
//! ├── lib.rs          ◄─── You are here (tracing setup)
//! ├── commands.rs     ◄─── compute / session / denominations
//! ├── session.rs      ◄─── Purchase amount + counters, line protocol
//! ├── tender.rs       ◄─── Per-denomination counters
//! ├── render.rs       ◄─── Text output
//! ├── labels.rs       ◄─── "2dollars" → "$2"
//! ├── config.rs       ◄─── TILL_* environment settings
//! └── error.rs        ◄─── CliError + codes
//! ```
//!
//! All change math lives in `till-core`; nothing here does arithmetic on
//! money beyond formatting it.

pub mod commands;
pub mod config;
pub mod error;
pub mod labels;
pub mod render;
pub mod session;
pub mod tender;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=till_core=debug` - Show engine decisions only
/// - Default: warnings everywhere, info for the till crates
///
/// Logs go to stderr; stdout carries only command output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,till_core=info,till_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
