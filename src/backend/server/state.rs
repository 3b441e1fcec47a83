/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is assembled once at startup. Its services are built explicitly
 * from their collaborators (hasher, token issuer, account store) and then
 * shared read-only by every request:
 *
 * - `auth` - sign-up / sign-in service
 * - `tokens` - token issuer, also used by the auth middleware to verify tokens
 * - `db_pool` - SQLite pool for the profile and bookmark queries
 *
 * # Thread Safety
 *
 * Nothing in here is mutated after construction; the services sit behind `Arc`
 * and `SqlitePool` is itself a cheap handle to a shared pool.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::hasher::PasswordHasher;
use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::SqliteAccountStore;
use crate::backend::server::config::JwtSecret;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Sign-up / sign-in service
    pub auth: Arc<AuthService>,

    /// Access token issuer and verifier
    pub tokens: Arc<TokenIssuer>,

    /// Database connection pool
    pub db_pool: SqlitePool,
}

impl AppState {
    /// Wire up the services on top of a connected, migrated pool
    pub fn new(db_pool: SqlitePool, jwt_secret: &JwtSecret) -> Self {
        let tokens = Arc::new(TokenIssuer::new(jwt_secret));
        let store = Arc::new(SqliteAccountStore::new(db_pool.clone()));
        let auth = Arc::new(AuthService::new(store, PasswordHasher::new(), tokens.clone()));

        Self {
            auth,
            tokens,
            db_pool,
        }
    }
}

/// Lets handlers take `State<Arc<AuthService>>` directly
impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

/// Lets handlers take `State<SqlitePool>` directly
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
