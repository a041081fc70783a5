//! Error types for the quickstart tool
//!
//! Resolver rejections are deliberately NOT part of this enum: a refused
//! edit is expected steady-state behavior and travels as
//! [`EditRejected`](crate::resolver::EditRejected) in a plain `Result`.

use crate::clipboard::ClipboardError;
use thiserror::Error;

/// Failures that can abort an operation (not a rejected edit).
#[derive(Error, Debug)]
pub enum QuickstartError {
    /// IO errors (terminal setup, stdout)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Clipboard write failures (recoverable; the caller logs and moves on)
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    /// JSON output serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for quickstart operations
pub type Result<T> = std::result::Result<T, QuickstartError>;

impl QuickstartError {
    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}
