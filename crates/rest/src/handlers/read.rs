//! Read handler.
//!
//! `GET /api/v1/admin/{resource}/{id}`

use axum::extract::{Path, State};
use shopd_store::DocumentStore;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::responses::ApiResponse;
use crate::state::AppState;

use super::resolve;

/// Reads a document by ID, with declared relations expanded.
///
/// # Response
///
/// - `200 OK` - Document found, returned in `data`
/// - `404 Not Found` - Unknown resource or no document with that ID
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path((resource, id)): Path<(String, String)>,
) -> RestResult<ApiResponse>
where
    S: DocumentStore,
{
    let desc = resolve(&resource)?;
    debug!(resource = desc.name, id = %id, "Processing read request");

    let doc = state
        .store()
        .find_by_id(desc, &id, true)
        .await?
        .ok_or_else(|| RestError::NotFound {
            resource: resource.clone(),
        })?;

    Ok(ApiResponse::ok(
        "Document retrieved successfully",
        doc.into_wire(),
    ))
}
