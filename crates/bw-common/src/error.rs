//! Error types for BloomWatch.
//!
//! The analytics engine itself is infallible by contract: degenerate
//! inputs (empty series, short series, no bloom history) produce empty
//! collections or sentinel values, never errors. `Error` covers the
//! CLI and configuration boundary only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for BloomWatch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Threshold file errors (load, parse, semantic validation).
    Config,
    /// Sample file I/O and serialization errors.
    Io,
    /// Malformed input payloads.
    Input,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Io => write!(f, "io"),
            ErrorCategory::Input => write!(f, "input"),
        }
    }
}

/// Errors surfaced by the CLI and configuration layers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse sample payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid threshold configuration: {message}")]
    Config { message: String },
}

impl Error {
    /// Stable error code for machine parsing.
    pub fn code(&self) -> u32 {
        match self {
            Error::Io(_) => 10,
            Error::Json(_) => 11,
            Error::Config { .. } => 12,
        }
    }

    /// Category this error belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Io(_) => ErrorCategory::Io,
            Error::Json(_) => ErrorCategory::Input,
            Error::Config { .. } => ErrorCategory::Config,
        }
    }
}
