/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and provides the account to handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::users::get_account_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated account extracted from the JWT token
///
/// Only the account ID is carried. The email in the token is a snapshot from
/// issue time and handlers read the current one from the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub account_id: i64,
}

/// Pull the token out of an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Extracts the account ID from the `sub` claim
/// 4. Checks the account still exists
/// 5. Attaches `AuthenticatedUser` to request extensions for use in handlers
///
/// Returns 401 Unauthorized if any step fails; 500 if the lookup itself fails.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        BackendError::Unauthorized
    })?;

    let claims = app_state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::Unauthorized
    })?;

    let account_id = claims.account_id().ok_or_else(|| {
        tracing::warn!("Token subject is not an account id: {}", claims.sub);
        BackendError::Unauthorized
    })?;

    if get_account_by_id(&app_state.db_pool, account_id).await?.is_none() {
        tracing::warn!(account_id, "Token refers to a deleted account");
        return Err(BackendError::Unauthorized);
    }

    request
        .extensions_mut()
        .insert(AuthenticatedUser { account_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated account
///
/// Only usable on routes behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}
