//! Error types for the search console.

use thiserror::Error;

/// Result type alias for console operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Errors that can occur while running the console.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// HTTP request failed (transport, DNS, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Provider payload claimed success but could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Configuration problem (unknown engine, unusable config path,
    /// credential entry aborted).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Browser process could not be spawned.
    #[error("Failed to open browser: {0}")]
    Browser(String),
}
