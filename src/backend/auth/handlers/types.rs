/**
 * Authentication Handler Types
 *
 * This module defines the request type used by authentication handlers and
 * re-exports the token envelope both endpoints return.
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
pub use crate::shared::AuthResponse;
use crate::shared::validation::{validate_email, validate_required, Validate};

/// Sign-up / sign-in request
///
/// Contains the email and password. The password is never logged; `Debug`
/// prints a placeholder instead.
#[derive(Deserialize, Serialize, Clone)]
pub struct AuthRequest {
    /// User's email address
    pub email: String,
    /// User's password (hashed on sign-up, verified on sign-in)
    pub password: String,
}

impl Validate for AuthRequest {
    fn validate(&self) -> Result<(), SharedError> {
        validate_email(&self.email)?;
        validate_required(&self.password, "password")
    }
}

impl std::fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
