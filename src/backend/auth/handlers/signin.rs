/**
 * Sign-in Handler
 *
 * This module implements the authentication handler for POST /auth/sign-in.
 *
 * # Security
 *
 * - An unknown email and a wrong password both return 403 `Credentials
 *   incorrect`, so responses do not reveal which emails are registered
 * - Passwords are never logged or returned in responses
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthRequest, AuthResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;

/// Sign-in handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing body, malformed email or empty password
/// * `403 Forbidden` - `Credentials incorrect`: unknown email or wrong password
/// * `500 Internal Server Error` - Database failure, unreadable stored hash or
///   signing failure
///
/// # Example Request
///
/// ```http
/// POST /auth/sign-in HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "asd@dada.com", "password": "asd123" }
/// ```
pub async fn sign_in(
    State(auth): State<Arc<AuthService>>,
    ValidatedJson(request): ValidatedJson<AuthRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Sign-in request for email: {}", request.email);

    let response = auth.sign_in(&request.email, &request.password).await?;

    Ok(Json(response))
}
