//! Shared helpers for integration tests.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};
use shopd_rest::{AppState, ServerConfig};
use shopd_store::{DocumentStore, MemoryStore, catalog};

/// Creates a test server over a fresh in-memory store.
pub async fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    create_test_server_with_config(ServerConfig::for_testing()).await
}

/// Creates a test server with a custom configuration.
pub async fn create_test_server_with_config(
    config: ServerConfig,
) -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(Arc::clone(&store), config);
    let app = shopd_rest::routing::create_routes(state);
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, store)
}

/// Seeds a product directly through the store.
pub async fn seed_product(store: &MemoryStore, name: &str, status: &str, price: f64) -> String {
    let doc = store
        .create(
            catalog::product(),
            json!({
                "name": name,
                "sku": format!("sku-{}", name.replace(' ', "-").to_lowercase()),
                "description": format!("A very nice {}", name),
                "category": "cat-1",
                "status": status,
                "price": price,
            }),
        )
        .await
        .expect("Failed to seed product");
    doc.id().to_string()
}

/// Seeds a product from an arbitrary payload.
pub async fn seed_product_raw(store: &MemoryStore, payload: Value) -> String {
    let doc = store
        .create(catalog::product(), payload)
        .await
        .expect("Failed to seed product");
    doc.id().to_string()
}

/// Seeds a category and returns its ID.
pub async fn seed_category(store: &MemoryStore, name: &str) -> String {
    let doc = store
        .create(
            catalog::find("categories").expect("categories in catalog"),
            json!({"name": name}),
        )
        .await
        .expect("Failed to seed category");
    doc.id().to_string()
}
