/**
 * User Profile Handlers
 *
 * `GET /users/me` and `PATCH /users`. Both run behind the auth middleware and
 * only ever touch the caller's own account.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::service::AuthError;
use crate::backend::auth::users::{get_account_by_id, update_account};
use crate::backend::error::{BackendError, StoreError};
use crate::backend::middleware::{AuthUser, ValidatedJson};
use crate::shared::{EditUserRequest, UserResponse};

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing, invalid or expired token
pub async fn get_me(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
) -> Result<Json<UserResponse>, BackendError> {
    let account = get_account_by_id(&pool, user.account_id)
        .await?
        .ok_or(BackendError::Unauthorized)?;

    Ok(Json(account.into()))
}

/// Edit current user handler
///
/// Applies the fields present in the body and returns the updated profile.
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or email
/// * `401 Unauthorized` - Missing, invalid or expired token
/// * `403 Forbidden` - `Credentials taken`: the new email belongs to another account
pub async fn edit_user(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
    ValidatedJson(request): ValidatedJson<EditUserRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    let account = update_account(
        &pool,
        user.account_id,
        request.email.as_deref(),
        request.first_name.as_deref(),
        request.last_name.as_deref(),
    )
    .await
    .map_err(|e| match e {
        StoreError::UniqueViolation => {
            tracing::warn!(account_id = user.account_id, "Profile update rejected: email taken");
            BackendError::from(AuthError::CredentialsTaken)
        }
        other => BackendError::from(other),
    })?
    .ok_or(BackendError::Unauthorized)?;

    tracing::info!(account_id = account.id, "Profile updated");

    Ok(Json(account.into()))
}
