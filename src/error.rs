//! Error types for Ordspor.

use thiserror::Error;

/// Library-level error type for Ordspor operations.
#[derive(Error, Debug)]
pub enum OrdsporError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid timing record: {0}")]
    Timings(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for Ordspor operations.
pub type Result<T> = std::result::Result<T, OrdsporError>;
