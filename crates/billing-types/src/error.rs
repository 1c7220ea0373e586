//! Error types for truck-billing

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Weight or rate text that does not parse as a number
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Import failed at line {line}: {reason}")]
    Import { line: usize, reason: String },

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("PDF export error: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, Error>;
