//! Create handler.
//!
//! `POST /api/v1/admin/{resource}`

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;
use shopd_store::DocumentStore;
use tracing::debug;

use crate::error::RestResult;
use crate::responses::ApiResponse;
use crate::state::AppState;

use super::resolve;

/// Creates a new document in the named collection.
///
/// The store assigns the document ID and stamps `createdAt`, `updatedAt`
/// and the version marker. Defaults and derived fields (such as slugs) are
/// applied before validation.
///
/// # Response
///
/// - `201 Created` - Document created, returned in `data`
/// - `400 Bad Request` - Payload failed validation
/// - `404 Not Found` - Unknown resource
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    Path(resource): Path<String>,
    Json(payload): Json<Value>,
) -> RestResult<ApiResponse>
where
    S: DocumentStore,
{
    let desc = resolve(&resource)?;
    debug!(resource = desc.name, "Processing create request");

    let doc = state.store().create(desc, payload).await?;

    Ok(ApiResponse::created("Document created successfully", doc.into_wire()))
}
