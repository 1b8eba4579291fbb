/// Shared application state
use crate::config::ServerConfig;
use crate::graphql::{build_schema, RosterSchema};
use roster_core::{InMemoryUserStore, UserStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub schema: RosterSchema,
    pub ide: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, depth: usize, ide: bool) -> Self {
        let schema = build_schema(Arc::clone(&store), depth);
        Self { store, schema, ide }
    }

    /// Build a fresh in-memory store and schema from configuration
    pub fn from_config(config: &ServerConfig) -> Self {
        let store: Arc<dyn UserStore> = if config.store.seed {
            Arc::new(InMemoryUserStore::seeded())
        } else {
            Arc::new(InMemoryUserStore::new())
        };

        Self::new(store, config.graphql.depth, config.graphql.ide)
    }
}
