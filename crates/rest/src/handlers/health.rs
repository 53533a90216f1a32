//! Health check endpoint handler.
//!
//! Provides a simple health check endpoint for monitoring and load balancers.

use axum::extract::State;
use serde_json::json;
use shopd_store::DocumentStore;
use tracing::debug;

use crate::error::RestResult;
use crate::responses::ApiResponse;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET /health`
///
/// # Response
///
/// - `200 OK` - Server is healthy
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<ApiResponse>
where
    S: DocumentStore,
{
    debug!("Processing health check request");

    Ok(ApiResponse::ok(
        "Service is healthy",
        json!({
            "status": "healthy",
            "backend": state.store().backend_name(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }),
    ))
}
