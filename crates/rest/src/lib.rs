//! # shopd-rest - Commerce API HTTP Layer
//!
//! This crate provides the HTTP API for the shopd commerce platform: a
//! generic admin CRUD surface over every entity in the store catalog, and a
//! reduced public storefront surface for products.
//!
//! ## Features
//!
//! - **Generic CRUD**: One set of handlers serves every catalogued
//!   resource, resolved from the URL path
//! - **Rich Listing**: Full-text search, typed range filters, multi-key
//!   sort, field projection and pagination on every list endpoint
//! - **Uniform Envelope**: All responses share one JSON envelope with
//!   `statusCode`, `success`, `message`, `data` and optional `meta`
//! - **Public Storefront**: Active-only product listing mapped to the
//!   storefront wire shape
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopd_rest::{ServerConfig, create_app};
//! use shopd_store::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::default();
//!     let app = create_app(MemoryStore::new());
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | list | GET | `/api/v1/admin/{resource}` |
//! | create | POST | `/api/v1/admin/{resource}` |
//! | read | GET | `/api/v1/admin/{resource}/{id}` |
//! | update | PUT | `/api/v1/admin/{resource}/{id}` |
//! | delete | DELETE | `/api/v1/admin/{resource}/{id}` |
//! | public list | GET | `/api/v1/public/products` |
//! | public read | GET | `/api/v1/public/products/{id}` |
//! | health | GET | `/health` |
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`error`] - Error types and the JSON error envelope
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Axum extractors for list parameters
//! - [`responses`] - The success envelope
//! - [`dto`] - Public wire representations
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use shopd_store::DocumentStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default
/// settings. For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: DocumentStore + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up the complete API with all handlers, middleware,
/// and configuration.
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: DocumentStore + 'static,
{
    info!(
        "Creating API server with backend: {}",
        store.backend_name()
    );

    // Create application state
    let state = AppState::new(Arc::new(store), config.clone());

    // Build the router with all API routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shopd={level},shopd_rest={level},shopd_store={level},tower_http=debug")));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
