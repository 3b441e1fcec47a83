//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - Public auth endpoints and the bearer-protected API
//!
//! # Route Types
//!
//! ## Public
//!
//! - `POST /auth/sign-up` - Register, returns an access token
//! - `POST /auth/sign-in` - Log in, returns an access token
//!
//! ## Protected (`Authorization: Bearer <token>`)
//!
//! - `GET /users/me`, `PATCH /users`
//! - `GET /bookmarks`, `POST /bookmarks`
//! - `GET /bookmarks/{id}`, `PATCH /bookmarks/{id}`, `DELETE /bookmarks/{id}`
//!
//! Anything else falls through to a JSON 404.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
