//! Error types for QuickBooks API operations.

use thiserror::Error;

use crate::fault::Failure;

/// Errors that can occur during QuickBooks API operations.
#[derive(Debug, Error)]
pub enum QuickbooksError {
    /// Configuration is missing or incomplete.
    #[error("QuickBooks configuration required: {0}")]
    ConfigMissing(String),

    /// A string did not match any variant of a closed enumeration.
    #[error("Invalid {kind} '{value}'")]
    InvalidValue { kind: &'static str, value: String },

    /// The entity cannot be sent in its current shape.
    #[error("Invalid entity: {0}")]
    InvalidEntity(String),

    /// A field required by the operation is empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The API answered with a fault payload.
    #[error("QuickBooks fault (HTTP {status}): {failure}")]
    Fault { status: u16, failure: Failure },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request body could not be encoded.
    #[error("Failed to serialize request: {0}")]
    Serialize(serde_json::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Local I/O error (reading entity files in the CLI).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuickbooksError {
    /// The vendor fault carried by this error, if any.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Fault { failure, .. } => Some(failure),
            _ => None,
        }
    }

    /// True when this is a fault whose first error is `Object Not Found`.
    pub fn is_object_not_found(&self) -> bool {
        self.failure().is_some_and(Failure::is_object_not_found)
    }
}

/// Result type alias for QuickBooks operations.
pub type Result<T> = core::result::Result<T, QuickbooksError>;
