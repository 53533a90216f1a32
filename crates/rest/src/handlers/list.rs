//! List handler.
//!
//! `GET /api/v1/admin/{resource}?search=..&field[op]=..&sort=..&fields=..&page=..&limit=..`

use axum::extract::{Path, State};
use shopd_store::{DocumentStore, PageInfo, Query, pipeline};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::RawListParams;
use crate::responses::{ApiResponse, list_payload};
use crate::state::AppState;

use super::resolve;

/// Lists documents with search, filters, sort, projection and pagination.
///
/// The query string is parsed once; the page query and the total count run
/// against the same search-and-filter predicate, so `totalDocuments` always
/// describes the same population the page was drawn from. The two store
/// calls are not atomic, so a concurrent write may still skew the count by
/// the time the response is assembled.
///
/// # Response
///
/// - `200 OK` - `data.results`/`data.data` plus `meta.pagination`
/// - `404 Not Found` - Unknown resource
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    Path(resource): Path<String>,
    RawListParams(params): RawListParams,
) -> RestResult<ApiResponse>
where
    S: DocumentStore,
{
    let desc = resolve(&resource)?;
    let limits = state.page_limits();
    debug!(
        resource = desc.name,
        search = params.search(),
        "Processing list request"
    );

    let list_query = pipeline::list_query(&params, desc, &limits, Query::new());
    let count_query = pipeline::count_query(&params, desc, Query::new());

    let items = state.store().find(desc, &list_query, true).await?;
    let total = state.store().count(desc, &count_query).await?;

    let pagination = PageInfo::new(params.page_spec(&limits), total);
    let items = items.into_iter().map(|doc| doc.into_wire()).collect();

    Ok(
        ApiResponse::ok("Documents retrieved successfully", list_payload(items))
            .with_pagination(&pagination),
    )
}
