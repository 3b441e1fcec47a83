/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * - Malformed or invalid request bodies (400)
 * - Missing or invalid access tokens (401)
 * - Credential failures and ownership violations (403)
 * - Missing resources (404)
 *
 * ## Internal errors
 *
 * Store failures, unreadable password hashes, signing and task failures. These
 * are logged with full detail and reported to the client as a bare 500 so no
 * internal detail (or credential-related wording) leaks out.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::service::AuthError;
use crate::backend::error::StoreError;
use crate::shared::SharedError;

/// Message sent for every 500 response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use bookmark_api::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "Bookmark not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. not found, forbidden)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Missing, malformed or expired bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Request body could not be parsed or failed validation
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Sign-up / sign-in failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Database failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// 403 for a resource the caller does not own
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::FORBIDDEN, message)
    }

    /// 404 for a resource that does not exist (or is not visible to the caller)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Unauthorized` - 401
    /// - `SharedError` - 400
    /// - `Auth` - 403 for credential errors, 500 otherwise
    /// - `Store` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Auth(AuthError::CredentialsTaken | AuthError::CredentialsIncorrect) => {
                StatusCode::FORBIDDEN
            }
            Self::Auth(_) | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::Auth(err @ (AuthError::CredentialsTaken | AuthError::CredentialsIncorrect)) => {
                err.to_string()
            }
            Self::Auth(_) | Self::Store(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// True for errors that indicate a server-side fault
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}
