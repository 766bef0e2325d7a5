//! Error types for the OWASP checker

use thiserror::Error;

/// Main error type for checker operations
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for checker operations
pub type Result<T> = std::result::Result<T, CheckerError>;
