//! Bookmark HTTP Handlers
//!
//! CRUD over the caller's own bookmarks. Reading someone else's bookmark looks
//! exactly like reading a missing one (404); trying to change or delete one is
//! refused with 403.

use axum::{extract::State, http::StatusCode, Json};
use sqlx::SqlitePool;

use super::db::{self, Bookmark};
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, AuthenticatedUser, IdPath, ValidatedJson};
use crate::shared::{BookmarkResponse, CreateBookmarkRequest, EditBookmarkRequest};

const ACCESS_DENIED: &str = "Access to resources denied";

/// Load a bookmark the caller is about to modify
async fn owned_bookmark(
    pool: &SqlitePool,
    user: &AuthenticatedUser,
    id: i64,
) -> Result<Bookmark, BackendError> {
    match db::get_bookmark(pool, id).await? {
        Some(bookmark) if bookmark.user_id == user.account_id => Ok(bookmark),
        _ => {
            tracing::warn!(
                account_id = user.account_id,
                bookmark_id = id,
                "Bookmark access denied"
            );
            Err(BackendError::forbidden(ACCESS_DENIED))
        }
    }
}

/// List the caller's bookmarks
pub async fn get_bookmarks(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<BookmarkResponse>>, BackendError> {
    let bookmarks = db::list_bookmarks(&pool, user.account_id).await?;

    Ok(Json(bookmarks.into_iter().map(Into::into).collect()))
}

/// Get one of the caller's bookmarks
pub async fn get_bookmark_by_id(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
) -> Result<Json<BookmarkResponse>, BackendError> {
    let bookmark = db::get_bookmark(&pool, id)
        .await?
        .filter(|b| b.user_id == user.account_id)
        .ok_or_else(|| BackendError::not_found("Bookmark not found"))?;

    Ok(Json(bookmark.into()))
}

/// Create a bookmark owned by the caller
pub async fn create_bookmark(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
    ValidatedJson(request): ValidatedJson<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<BookmarkResponse>), BackendError> {
    let bookmark = db::create_bookmark(&pool, user.account_id, &request).await?;

    tracing::info!(account_id = user.account_id, bookmark_id = bookmark.id, "Bookmark created");

    Ok((StatusCode::CREATED, Json(bookmark.into())))
}

/// Edit one of the caller's bookmarks
pub async fn edit_bookmark_by_id(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<EditBookmarkRequest>,
) -> Result<Json<BookmarkResponse>, BackendError> {
    owned_bookmark(&pool, &user, id).await?;

    let bookmark = db::update_bookmark(&pool, id, &request)
        .await?
        .ok_or_else(|| BackendError::forbidden(ACCESS_DENIED))?;

    Ok(Json(bookmark.into()))
}

/// Delete one of the caller's bookmarks
pub async fn delete_bookmark_by_id(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
) -> Result<StatusCode, BackendError> {
    owned_bookmark(&pool, &user, id).await?;

    db::delete_bookmark(&pool, id).await?;

    tracing::info!(account_id = user.account_id, bookmark_id = id, "Bookmark deleted");

    Ok(StatusCode::NO_CONTENT)
}
