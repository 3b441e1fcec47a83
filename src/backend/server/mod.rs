//! Server Module
//!
//! Everything needed to bring the HTTP server up.
//!
//! - **`config`** - Environment configuration, database connection and migrations
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - App creation and graceful shutdown
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `Config::from_env` (fails without a strong `JWT_SECRET`)
//! 2. **Database**: connect and run the embedded migrations
//! 3. **State Creation**: hasher, token issuer and account store wired into `AuthService`
//! 4. **Router Creation**: routes, auth middleware, tracing layer

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{Config, ConfigError, JwtSecret};
pub use init::{create_app, shutdown_signal};
pub use state::AppState;
