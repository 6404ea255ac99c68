//! Error types for grid interaction.
//!
//! Nothing here escapes the pointer handlers: they log and drop. The errors
//! surface from the fallible helpers (attribute parsing, settings loading).

use thiserror::Error;

/// Errors that can occur while interpreting grid input or configuration
#[derive(Error, Debug)]
pub enum GridError {
    /// A hit-tested element did not carry a required coordinate attribute
    #[error("missing attribute: {0}")]
    MissingAttribute(&'static str),

    /// A coordinate attribute was present but not an integer
    #[error("invalid {attribute} value: {value:?}")]
    InvalidCoordinate {
        attribute: &'static str,
        value: String,
    },

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings JSON could not be parsed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings parsed but hold an unusable value
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for grid operations
pub type GridResult<T> = Result<T, GridError>;
