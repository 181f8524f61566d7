//! # Query Extractor
//!
//! [`ApiQuery`] wraps axum's `Query` so a missing or malformed parameter is
//! reported as `422 Unprocessable Entity` with the usual `{"detail": ...}` body
//! instead of axum's plain-text rejection.
//!
//! ```rust,ignore
//! async fn handler(ApiQuery(params): ApiQuery<DataQuery>) -> ProbeResponse {
//!     // params.data is guaranteed to be present
//! }
//! ```

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use lib_core::AppError;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Query string extractor that rejects with [`AppError::InvalidQuery`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                let detail = rejection.body_text();
                warn!("[QUERY] Rejected {}: {}", parts.uri, detail);
                AppError::InvalidQuery(detail)
            })?;

        Ok(Self(value))
    }
}
