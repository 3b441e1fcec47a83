//! Common test utilities and helpers
//!
//! - **`app`** - In-memory application fixture and request helpers
//! - **`auth_helpers`** - Sign-up shortcuts returning access tokens

#![allow(dead_code)]

pub mod app;
pub mod auth_helpers;

pub use app::*;
pub use auth_helpers::*;
