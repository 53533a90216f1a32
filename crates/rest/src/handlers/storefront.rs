//! Public storefront handlers.
//!
//! `GET /api/v1/public/products` and `GET /api/v1/public/products/{id}`
//!
//! The public surface differs from the admin surface in two ways: only
//! active products are visible, and documents are mapped to the reduced
//! [`PublicProduct`] shape instead of being returned verbatim. The full
//! query pipeline (search, filters, sort, pagination) still applies on top
//! of the visibility filter.

use axum::extract::{Path, State};
use shopd_store::{DocumentStore, Filter, PageInfo, Query, catalog, pipeline};
use tracing::debug;

use crate::dto::PublicProduct;
use crate::error::{RestError, RestResult};
use crate::extractors::RawListParams;
use crate::responses::{ApiResponse, list_payload};
use crate::state::AppState;

/// Base query restricting the storefront to visible products.
fn visible() -> Query {
    Query::new().with_filter(Filter::eq_str("status", "active"))
}

/// Lists active products in the public shape.
///
/// # Response
///
/// - `200 OK` - `data.results`/`data.data` plus `meta.pagination`
pub async fn public_products_handler<S>(
    State(state): State<AppState<S>>,
    RawListParams(params): RawListParams,
) -> RestResult<ApiResponse>
where
    S: DocumentStore,
{
    let desc = catalog::product();
    let limits = state.page_limits();
    debug!(search = params.search(), "Processing public product list");

    let list_query = pipeline::list_query(&params, desc, &limits, visible());
    let count_query = pipeline::count_query(&params, desc, visible());

    let items = state.store().find(desc, &list_query, true).await?;
    let total = state.store().count(desc, &count_query).await?;

    let pagination = PageInfo::new(params.page_spec(&limits), total);
    let items = items
        .iter()
        .map(|doc| serde_json::to_value(PublicProduct::from_document(doc)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| RestError::Internal {
            message: err.to_string(),
        })?;

    Ok(
        ApiResponse::ok("Products retrieved successfully", list_payload(items))
            .with_pagination(&pagination),
    )
}

/// Reads a single active product in the public shape.
///
/// Products that exist but are not active are indistinguishable from
/// missing ones.
///
/// # Response
///
/// - `200 OK` - Product in `data`
/// - `404 Not Found` - No active product with that ID
pub async fn public_product_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<ApiResponse>
where
    S: DocumentStore,
{
    let desc = catalog::product();
    debug!(id = %id, "Processing public product read");

    let doc = state
        .store()
        .find_by_id(desc, &id, true)
        .await?
        .filter(|doc| doc.field("status").as_str() == Some("active"))
        .ok_or_else(|| RestError::NotFound {
            resource: desc.path.to_string(),
        })?;

    let data = serde_json::to_value(PublicProduct::from_document(&doc)).map_err(|err| {
        RestError::Internal {
            message: err.to_string(),
        }
    })?;
    Ok(ApiResponse::ok("Product retrieved successfully", data))
}
