//! Core error types for pomotick-core.
//!
//! Controller operations are total; only the edges a host touches
//! (command parsing, event encoding) can fail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Host input that does not name a command
    #[error("unknown command '{0}' (expected toggle, reset, tick, status, log or quit)")]
    UnknownCommand(String),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
