//! Bookmark API - Main Library
//!
//! A small REST service: accounts sign up and sign in with an email and
//! password, receive a short-lived HS256 access token, and use it to manage
//! their own profile and bookmarks.
//!
//! # Module Structure
//!
//! - **`shared`** - Request/response types, validation and the shared error type
//! - **`backend`** - Axum server, authentication, persistence and handlers
//!
//! # Usage
//!
//! ```rust,no_run
//! use bookmark_api::backend::server::{create_app, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
