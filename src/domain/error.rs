//! Error types for main-push-guard.

use thiserror::Error;

/// Failures on the hook path. All of them resolve to an allow decision.
#[derive(Debug, Error)]
pub enum GuardError {
    /// I/O error while reading stdin
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes were not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Guard pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}
