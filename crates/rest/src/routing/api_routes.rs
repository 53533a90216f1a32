//! API route configuration.
//!
//! Defines all routes for the commerce API.

use axum::{
    Router,
    routing::get,
};
use shopd_store::DocumentStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
///
/// ## Admin (`/api/v1/admin`)
/// - `GET /{resource}` - List with search, filters, sort, pagination
/// - `POST /{resource}` - Create
/// - `GET /{resource}/{id}` - Read
/// - `PUT /{resource}/{id}` - Update
/// - `DELETE /{resource}/{id}` - Delete
///
/// ## Public (`/api/v1/public`)
/// - `GET /products` - Active products in the storefront shape
/// - `GET /products/{id}` - A single active product
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: DocumentStore + 'static,
{
    let admin = Router::new()
        .route(
            "/{resource}",
            get(handlers::list_handler::<S>).post(handlers::create_handler::<S>),
        )
        .route(
            "/{resource}/{id}",
            get(handlers::read_handler::<S>)
                .put(handlers::update_handler::<S>)
                .delete(handlers::delete_handler::<S>),
        );

    let public = Router::new()
        .route("/products", get(handlers::public_products_handler::<S>))
        .route("/products/{id}", get(handlers::public_product_handler::<S>));

    Router::new()
        .route("/health", get(handlers::health_handler::<S>))
        .nest("/api/v1/admin", admin)
        .nest("/api/v1/public", public)
        .with_state(state)
}
