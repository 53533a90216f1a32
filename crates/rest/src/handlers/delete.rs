//! Delete handler.
//!
//! `DELETE /api/v1/admin/{resource}/{id}`

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use shopd_store::DocumentStore;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

use super::resolve;

/// Deletes a document by ID.
///
/// # Response
///
/// - `204 No Content` - Document deleted; the body is empty
/// - `404 Not Found` - Unknown resource or no document with that ID
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path((resource, id)): Path<(String, String)>,
) -> RestResult<StatusCode>
where
    S: DocumentStore,
{
    let desc = resolve(&resource)?;
    debug!(resource = desc.name, id = %id, "Processing delete request");

    state
        .store()
        .delete_by_id(desc, &id)
        .await?
        .ok_or_else(|| RestError::NotFound {
            resource: resource.clone(),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
