//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::ReviewsClient;
use crate::config::MerchantConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// review API client and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: MerchantConfig,
    reviews: ReviewsClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: MerchantConfig) -> Self {
        let reviews = ReviewsClient::new(config.reviews_api_url.clone());

        Self {
            inner: Arc::new(AppStateInner { config, reviews }),
        }
    }

    /// Get a reference to the dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &MerchantConfig {
        &self.inner.config
    }

    /// Get a reference to the review API client.
    #[must_use]
    pub fn reviews(&self) -> &ReviewsClient {
        &self.inner.reviews
    }
}
