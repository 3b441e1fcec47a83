/**
 * Validated JSON Extractor
 *
 * `ValidatedJson<T>` deserializes the request body like `axum::Json` and then
 * runs `T::validate`. Every way a body can be wrong (no body, wrong content
 * type, syntax error, missing field, failed validation) becomes a
 * `400 Bad Request`, before the handler runs.
 */

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::shared::{SharedError, Validate};

/// JSON body that has passed validation
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            SharedError::serialization(rejection.body_text())
        })?;

        value.validate()?;

        Ok(Self(value))
    }
}
