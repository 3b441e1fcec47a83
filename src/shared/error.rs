//! Shared Error Types
//!
//! Errors raised while turning a request body into one of the request types in
//! this module. Both variants are client mistakes and map to `400 Bad Request`
//! at the HTTP boundary.
//!
//! # Usage
//!
//! ```rust
//! use bookmark_api::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "email must be an email");
//! ```
use thiserror::Error;

/// Request shape errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// The body could not be read as the expected JSON document
    #[error("Malformed request body: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// A field was present but did not pass validation
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
