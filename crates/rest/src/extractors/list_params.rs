//! List parameter extractor.
//!
//! Collects the raw query string into [`ListParams`] so that every list
//! endpoint and its matching count share one parse of the parameters.

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use shopd_store::ListParams;

use crate::error::RestError;

/// Axum extractor wrapping [`ListParams`].
///
/// # Example
///
/// ```rust,ignore
/// use shopd_rest::extractors::RawListParams;
///
/// async fn list_handler(RawListParams(params): RawListParams) {
///     let spec = params.page_spec(&limits);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RawListParams(
    /// The parsed list parameters.
    pub ListParams,
);

impl<S> FromRequestParts<S> for RawListParams
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(map) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|err| RestError::bad_request(format!("invalid query string: {}", err)))?;
        Ok(RawListParams(ListParams::from_map(map)))
    }
}
