//! Bookmarks Module
//!
//! Per-account bookmark records.
//!
//! - **`db`** - Bookmark row type and queries
//! - **`handlers`** - `/bookmarks` HTTP handlers (all behind the auth middleware)

pub mod db;

pub mod handlers;

pub use handlers::{
    create_bookmark, delete_bookmark_by_id, edit_bookmark_by_id, get_bookmark_by_id, get_bookmarks,
};
