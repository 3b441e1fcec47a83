//! Numeric path parameter extractor
//!
//! `axum::extract::Path<i64>` rejects a non-numeric segment with a plain-text
//! body. `IdPath` turns that into the same JSON 400 every other invalid input
//! gets.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// Single integer path parameter, e.g. the `{id}` in `/bookmarks/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected path parameter: {}", rejection.body_text());
                SharedError::validation("id", "id must be an integer")
            })?;

        Ok(Self(id))
    }
}
