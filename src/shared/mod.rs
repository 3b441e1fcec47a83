//! Shared Module
//!
//! Request and response types exchanged with API clients, plus the
//! validation rules those request types enforce. Nothing in here touches the
//! database or the HTTP stack, so the types can be reused by clients and tests.

/// Shared error types
pub mod error;

/// Field validation helpers and the `Validate` trait
pub mod validation;

/// Token envelope returned by sign-up / sign-in
pub mod auth;

/// User profile request/response types
pub mod user;

/// Bookmark request/response types
pub mod bookmark;

pub use auth::AuthResponse;
pub use error::SharedError;
pub use validation::Validate;
pub use user::{EditUserRequest, UserResponse};
pub use bookmark::{BookmarkResponse, CreateBookmarkRequest, EditBookmarkRequest};
