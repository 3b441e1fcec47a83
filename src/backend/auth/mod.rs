//! Authentication Module
//!
//! Account registration, credential checks and access tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── hasher.rs       - Argon2id password hashing
//! ├── sessions.rs     - JWT issuance and verification
//! ├── users.rs        - Account model, AccountStore trait and queries
//! ├── service.rs      - Sign-up / sign-in flow
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Sign up**: email + password → password hashed → account created → token returned
//! 2. **Sign in**: email + password → account looked up → password verified → token returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` → verified by
//!    `middleware::auth_middleware`
//!
//! # Security
//!
//! - Passwords are hashed with Argon2id and a per-password random salt
//! - Tokens are HS256 JWTs that expire 15 minutes after issuance
//! - Sign-in failures never say whether the email exists
//! - Sign-up does report a taken email (`Credentials taken`)

/// Password hashing
pub mod hasher;

/// JWT token generation and validation
pub mod sessions;

/// Account data model and database operations
pub mod users;

/// Sign-up / sign-in orchestration
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthRequest, AuthResponse};
pub use handlers::{sign_in, sign_up};
pub use hasher::{HashFormatError, PasswordHasher};
pub use service::{AuthError, AuthService};
pub use sessions::{Claims, TokenIssuer, ACCESS_TOKEN_TTL};
pub use users::{Account, AccountStore, SqliteAccountStore};
