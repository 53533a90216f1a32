//! Update handler.
//!
//! `PUT /api/v1/admin/{resource}/{id}`

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;
use shopd_store::DocumentStore;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::responses::ApiResponse;
use crate::state::AppState;

use super::resolve;

/// Merges the request body into an existing document.
///
/// Fields present in the body replace their stored counterparts; fields
/// absent from the body are left alone. Store-managed metadata (`_id`,
/// timestamps, the version marker) cannot be overwritten. The merged
/// document is re-validated before it is stored.
///
/// # Response
///
/// - `200 OK` - Updated document in `data`
/// - `400 Bad Request` - Merged document failed validation
/// - `404 Not Found` - Unknown resource or no document with that ID
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path((resource, id)): Path<(String, String)>,
    Json(patch): Json<Value>,
) -> RestResult<ApiResponse>
where
    S: DocumentStore,
{
    let desc = resolve(&resource)?;
    debug!(resource = desc.name, id = %id, "Processing update request");

    let doc = state
        .store()
        .update_by_id(desc, &id, patch)
        .await?
        .ok_or_else(|| RestError::NotFound {
            resource: resource.clone(),
        })?;

    Ok(ApiResponse::ok(
        "Document updated successfully",
        doc.into_wire(),
    ))
}
