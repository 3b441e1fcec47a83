//! Authentication Handlers Module
//!
//! HTTP handlers for the two public authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - Account registration handler
//! └── signin.rs   - Credential check handler
//! ```
//!
//! # Handlers
//!
//! - **`sign_up`** - POST /auth/sign-up - 201 with an access token
//! - **`sign_in`** - POST /auth/sign-in - 200 with an access token
//!
//! Both take `{ "email", "password" }` and return `{ "access_token" }`.

/// Request and response types
pub mod types;

/// Sign-up handler
pub mod signup;

/// Sign-in handler
pub mod signin;

pub use types::{AuthRequest, AuthResponse};

pub use signin::sign_in;
pub use signup::sign_up;
