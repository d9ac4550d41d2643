//! Error types for the CZML library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for CZML operations.
///
/// Every data error is raised while a value or composite is being
/// constructed. Rendering a constructed object to JSON never fails.
#[derive(Error, Debug)]
pub enum Error {
    /// Value container has a length that is neither a constant nor a set of samples
    #[error(
        "Invalid value length {len}: expected 3 values (constant) \
         or a positive multiple of 4 values (time-tagged [Time, X, Y, Z] samples)"
    )]
    Shape { len: usize },

    /// Two contributors of one composite own the same JSON key
    #[error("Composition of {property} is invalid: key '{key}' is owned by both {first} and {second}")]
    Composition {
        property: &'static str,
        key: &'static str,
        first: &'static str,
        second: &'static str,
    },

    /// Numeric element that JSON cannot carry (NaN or infinite)
    #[error("Element {index} is not a finite number")]
    NonFiniteElement { index: usize },

    /// Scalar number or epoch that JSON cannot carry (NaN or infinite)
    #[error("{field} is not a finite number")]
    NonFiniteNumber { field: &'static str },

    /// Unknown enumeration token
    #[error("Invalid {kind} token: '{token}'")]
    InvalidToken { kind: &'static str, token: String },

    /// Settings file does not exist or cannot be accessed
    #[error("Settings file not found: {0}")]
    SettingsNotFound(PathBuf),

    /// Date/time could not be formatted as ISO-8601
    #[error("Time formatting failed: {0}")]
    TimeFormat(#[from] time::error::Format),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create an invalid token error.
    pub fn invalid_token(kind: &'static str, token: impl Into<String>) -> Self {
        Self::InvalidToken {
            kind,
            token: token.into(),
        }
    }
}

/// Result type alias for CZML operations.
pub type Result<T> = std::result::Result<T, Error>;
