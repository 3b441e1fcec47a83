/**
 * Sign-up Handler
 *
 * This module implements the account registration handler for POST /auth/sign-up.
 *
 * # Registration Process
 *
 * 1. Validate email format and that the password is non-empty (extractor)
 * 2. Hash password using Argon2id
 * 3. Create the account; a taken email is rejected by the unique index
 * 4. Return a fresh access token
 *
 * # Security
 *
 * - Passwords are never stored, logged or returned
 * - Tokens expire after 15 minutes
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{AuthRequest, AuthResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;

/// Sign-up handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing body, malformed email or empty password
/// * `403 Forbidden` - `Credentials taken`: the email is already registered
/// * `500 Internal Server Error` - Hashing, database or signing failure
///
/// # Example Request
///
/// ```http
/// POST /auth/sign-up HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "asd@dada.com", "password": "asd123" }
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 201 Created
///
/// { "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn sign_up(
    State(auth): State<Arc<AuthService>>,
    ValidatedJson(request): ValidatedJson<AuthRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    tracing::info!("Sign-up request for email: {}", request.email);

    let response = auth.sign_up(&request.email, &request.password).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
