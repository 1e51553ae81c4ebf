//! Error types for sheetkit.

use thiserror::Error;

/// Result type for sheetkit operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur in sheetkit.
#[derive(Debug, Error)]
pub enum GridError {
    /// Transport-level failure talking to the service.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// No sheet matched a name or id lookup.
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// A range could not be parsed or is malformed.
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML config parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GridError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a sheet-not-found error.
    pub fn sheet_not_found(what: impl std::fmt::Display) -> Self {
        Self::SheetNotFound(what.to_string())
    }
}
