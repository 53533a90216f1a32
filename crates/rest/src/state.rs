//! Application state for the shopd HTTP API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the document store and the server configuration.

use std::sync::Arc;

use shopd_store::{DocumentStore, PageLimits};

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The document store type (must implement [`DocumentStore`])
pub struct AppState<S> {
    /// The document store backend.
    store: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: DocumentStore> AppState<S> {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the pagination limits for list endpoints.
    pub fn page_limits(&self) -> PageLimits {
        self.config.page_limits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopd_store::MemoryStore;

    #[test]
    fn test_state_clone_shares_store() {
        let state = AppState::new(Arc::new(MemoryStore::new()), ServerConfig::for_testing());
        let cloned = state.clone();
        assert!(std::ptr::eq(state.store(), cloned.store()));
        assert_eq!(cloned.config().default_limit, 100);
    }
}
