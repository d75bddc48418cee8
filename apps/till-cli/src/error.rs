//! # CLI Error Type
//!
//! Unified error type for till commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in till                                   │
//! │                                                                         │
//! │  till compute / till session                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Argument parse? ───── CliError::Input ──────────┐                      │
//! │         │                                         │                      │
//! │         ▼                                         ▼                      │
//! │  Engine rejects? ───── CoreError ─────────────► CliError                 │
//! │         │                                         │                      │
//! │         ▼                                         ├─ one-shot: miette    │
//! │  Success ──► render                               │   report, exit != 0  │
//! │                                                   └─ session: print      │
//! │                                                       "[CODE] message",  │
//! │                                                       keep reading       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use till_core::{CoreError, ValidationError};

/// Errors surfaced to the terminal user.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// The engine rejected the input.
    #[error(transparent)]
    #[diagnostic(code(till::core))]
    Core(#[from] CoreError),

    /// An amount or count failed boundary validation.
    #[error(transparent)]
    #[diagnostic(code(till::validation))]
    Validation(#[from] ValidationError),

    /// A counter command named a denomination the table does not have.
    #[error("Unknown denomination: {0}")]
    #[diagnostic(
        code(till::unknown_denomination),
        help("run `till denominations` to list valid names")
    )]
    UnknownDenomination(String),

    /// Malformed command-line or session input.
    #[error("Invalid input: {0}")]
    #[diagnostic(code(till::input))]
    Input(String),

    /// Bad environment configuration.
    #[error("Configuration error: {0}")]
    #[diagnostic(code(till::config))]
    Config(String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(till::io))]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(till::json))]
    Json(#[from] serde_json::Error),
}

/// Machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Denomination table or arithmetic failure
    BusinessLogic,

    /// Unparseable input
    InputError,

    /// Bad configuration
    ConfigError,

    /// Anything else
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BusinessLogic => "BUSINESS_LOGIC",
            ErrorCode::InputError => "INPUT_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl CliError {
    /// Creates an input error.
    pub fn input(message: impl Into<String>) -> Self {
        CliError::Input(message.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        CliError::Config(message.into())
    }

    /// Classifies the error for display and scripting.
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Core(CoreError::Validation(_)) | CliError::Validation(_) => {
                ErrorCode::ValidationError
            }
            CliError::Core(_) => ErrorCode::BusinessLogic,
            CliError::UnknownDenomination(_) | CliError::Input(_) => ErrorCode::InputError,
            CliError::Config(_) => ErrorCode::ConfigError,
            CliError::Io(_) | CliError::Json(_) => {
                tracing::error!(error = %self, "Internal failure");
                ErrorCode::Internal
            }
        }
    }
}
