/**
 * Account Model and Database Operations
 *
 * This module holds the `users` row type and the queries the authentication
 * flow needs. The `AccountStore` trait is the seam between the flow and the
 * database: the flow only ever sees `StoreError::UniqueViolation` for a taken
 * email, never a raw driver error code.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::error::StoreError;
use crate::shared::UserResponse;

/// Account row in the `users` table
#[derive(Clone, sqlx::FromRow)]
pub struct Account {
    /// Auto-increment account ID
    pub id: i64,
    /// Unique email address
    pub email: String,
    /// Argon2id PHC string
    pub hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("hash", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl From<Account> for UserResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Account persistence used by the authentication flow
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account
    ///
    /// # Errors
    /// `StoreError::UniqueViolation` if the email is already registered
    async fn create_account(&self, email: &str, hash: &str) -> Result<Account, StoreError>;

    /// Look up an account by its email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;
}

/// `AccountStore` backed by the SQLite pool
#[derive(Clone, Debug)]
pub struct SqliteAccountStore {
    pool: SqlitePool,
}

impl SqliteAccountStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for SqliteAccountStore {
    async fn create_account(&self, email: &str, hash: &str) -> Result<Account, StoreError> {
        create_account(&self.pool, email, hash).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        get_account_by_email(&self.pool, email).await
    }
}

/// Create a new account
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Account email
/// * `hash` - Password hash
///
/// # Returns
/// Created account, or `StoreError::UniqueViolation` if the email is taken
pub async fn create_account(
    pool: &SqlitePool,
    email: &str,
    hash: &str,
) -> Result<Account, StoreError> {
    let now = Utc::now();

    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO users (email, hash, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, email, hash, first_name, last_name, created_at, updated_at
        "#,
    )
    .bind(email)
    .bind(hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(account)
}

/// Get account by email
///
/// # Returns
/// Account or None if not found
pub async fn get_account_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Account>, StoreError> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, email, hash, first_name, last_name, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Get account by ID
///
/// # Returns
/// Account or None if not found
pub async fn get_account_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Account>, StoreError> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, email, hash, first_name, last_name, created_at, updated_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

/// Apply a partial profile update
///
/// `None` fields keep their stored value.
///
/// # Returns
/// Updated account, `None` if it no longer exists, or
/// `StoreError::UniqueViolation` if the new email is taken
pub async fn update_account(
    pool: &SqlitePool,
    id: i64,
    email: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<Option<Account>, StoreError> {
    let now = Utc::now();

    let account = sqlx::query_as::<_, Account>(
        r#"
        UPDATE users
        SET email = COALESCE(?, email),
            first_name = COALESCE(?, first_name),
            last_name = COALESCE(?, last_name),
            updated_at = ?
        WHERE id = ?
        RETURNING id, email, hash, first_name, last_name, created_at, updated_at
        "#,
    )
    .bind(email)
    .bind(first_name)
    .bind(last_name)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}
