//! # Shell Error Type
//!
//! Failures of the host itself, as opposed to rejected cart operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in cart-shell                             │
//! │                                                                         │
//! │  Script / config input                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Unreadable file? ─── ShellError::Io ────────┐                         │
//! │  Bad JSON?        ─── ShellError::Json ──────┤                         │
//! │  Bad TOML/limits? ─── ShellError::Config ────┼──► stderr, exit 1       │
//! │  Bad arguments?   ─── ShellError::Usage ─────┘                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Cart command ─── CartError ──► Outcome::fail ──► stdout (exit 0)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Domain failures never become a `ShellError`; they are reported in-band.

use thiserror::Error;

/// Result type alias for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading a script or config file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The script is not valid command JSON.
    #[error("Invalid command script: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be parsed or is out of range.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Command-line arguments were not understood.
    #[error("{0}")]
    Usage(String),
}

impl From<toml::de::Error> for ShellError {
    fn from(err: toml::de::Error) -> Self {
        ShellError::Config(err.to_string())
    }
}
