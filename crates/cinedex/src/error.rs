//! Error types for cinedex
//!
//! One application-level error enum shared by the data and provider layers.

use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
}

/// Result type alias for cinedex operations
pub type Result<T> = std::result::Result<T, AppError>;
