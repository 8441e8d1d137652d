//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::graphql::{ReviewSchema, build_schema};
use crate::store::ReviewStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// review store and the executable schema built over it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: Arc<ReviewStore>,
    schema: ReviewSchema,
}

impl AppState {
    /// Create a new application state with the production seed.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self::with_store(config, Arc::new(ReviewStore::seeded()))
    }

    /// Create application state over an explicit store (used by tests).
    #[must_use]
    pub fn with_store(config: ApiConfig, store: Arc<ReviewStore>) -> Self {
        let schema = build_schema(Arc::clone(&store));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                schema,
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the review store.
    #[must_use]
    pub fn store(&self) -> &Arc<ReviewStore> {
        &self.inner.store
    }

    /// Get a reference to the executable schema.
    #[must_use]
    pub fn schema(&self) -> &ReviewSchema {
        &self.inner.schema
    }
}
