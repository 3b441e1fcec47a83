//! Middleware Module
//!
//! Request processing that runs before handlers:
//!
//! - **`auth`** - Bearer-token guard for protected routes and the `AuthUser` extractor
//! - **`id_path`** - Integer path parameter extractor with a JSON 400 rejection
//! - **`validated_json`** - JSON body extractor that rejects invalid input with 400

pub mod auth;

pub mod id_path;

pub mod validated_json;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
