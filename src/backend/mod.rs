//! Backend Module
//!
//! All server-side code: an Axum HTTP API for account sign-up / sign-in with
//! bearer tokens, plus per-account profile and bookmark endpoints backed by
//! SQLite.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Password hashing, access tokens, accounts, sign-up / sign-in
//! - **`users`** - Current user profile endpoints
//! - **`bookmarks`** - Bookmark storage and CRUD endpoints
//! - **`middleware`** - Bearer-token guard and request extractors
//! - **`error`** - Backend error types and their HTTP mapping
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; lower layers have their own
//! `thiserror` enums that convert into it, so `?` works throughout. Internal
//! failures are logged and reported as a bare 500.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and account management
pub mod auth;

/// User profile endpoints
pub mod users;

/// Bookmark storage and endpoints
pub mod bookmarks;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppState};
