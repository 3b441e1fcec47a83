//! Backend Error Module
//!
//! Error types used by the HTTP layer and the stores beneath it.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and its status/message mapping
//! ├── store.rs      - StoreError, classified database failures
//! └── conversion.rs - IntoResponse for BackendError
//! ```
//!
//! Handlers return `Result<_, BackendError>` and use `?` on service and store
//! calls; the `From` impls pick the right variant.

/// Error type definitions
pub mod types;

/// Database error classification
pub mod store;

/// Error conversion implementations
pub mod conversion;

pub use store::StoreError;
pub use types::BackendError;
