//! Users Module
//!
//! Profile endpoints for the authenticated account:
//!
//! - `GET /users/me` - current profile
//! - `PATCH /users` - partial profile update
//!
//! The account queries themselves live in `auth::users`.

pub mod handlers;

pub use handlers::{edit_user, get_me};
