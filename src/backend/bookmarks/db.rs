/**
 * Bookmark Database Operations
 *
 * Queries over the `bookmarks` table. Ownership is not checked here; the
 * handlers decide what the caller may see or change.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::error::StoreError;
use crate::shared::{BookmarkResponse, CreateBookmarkRequest, EditBookmarkRequest};

/// Bookmark row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    /// Owner account ID
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id,
            title: bookmark.title,
            description: bookmark.description,
            link: bookmark.link,
            user_id: bookmark.user_id,
            created_at: bookmark.created_at,
            updated_at: bookmark.updated_at,
        }
    }
}

/// All bookmarks owned by an account, oldest first
pub async fn list_bookmarks(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Bookmark>, StoreError> {
    let bookmarks = sqlx::query_as::<_, Bookmark>(
        r#"
        SELECT id, title, description, link, user_id, created_at, updated_at
        FROM bookmarks
        WHERE user_id = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(bookmarks)
}

/// Get a bookmark by ID, whoever owns it
pub async fn get_bookmark(pool: &SqlitePool, id: i64) -> Result<Option<Bookmark>, StoreError> {
    let bookmark = sqlx::query_as::<_, Bookmark>(
        r#"
        SELECT id, title, description, link, user_id, created_at, updated_at
        FROM bookmarks
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(bookmark)
}

/// Insert a bookmark owned by `user_id`
pub async fn create_bookmark(
    pool: &SqlitePool,
    user_id: i64,
    request: &CreateBookmarkRequest,
) -> Result<Bookmark, StoreError> {
    let now = Utc::now();

    let bookmark = sqlx::query_as::<_, Bookmark>(
        r#"
        INSERT INTO bookmarks (title, description, link, user_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, title, description, link, user_id, created_at, updated_at
        "#,
    )
    .bind(&request.title)
    .bind(&request.description)
    .bind(&request.link)
    .bind(user_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(bookmark)
}

/// Apply a partial update; `None` fields keep their stored value
pub async fn update_bookmark(
    pool: &SqlitePool,
    id: i64,
    request: &EditBookmarkRequest,
) -> Result<Option<Bookmark>, StoreError> {
    let now = Utc::now();

    let bookmark = sqlx::query_as::<_, Bookmark>(
        r#"
        UPDATE bookmarks
        SET title = COALESCE(?, title),
            description = COALESCE(?, description),
            link = COALESCE(?, link),
            updated_at = ?
        WHERE id = ?
        RETURNING id, title, description, link, user_id, created_at, updated_at
        "#,
    )
    .bind(&request.title)
    .bind(&request.description)
    .bind(&request.link)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(bookmark)
}

/// Delete a bookmark
///
/// # Returns
/// Whether a row was deleted
pub async fn delete_bookmark(pool: &SqlitePool, id: i64) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM bookmarks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
