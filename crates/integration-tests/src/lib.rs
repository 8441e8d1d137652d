//! Integration tests for Craigmont Reviews.
//!
//! # Running Tests
//!
//! ```bash
//! # Start both servers
//! cargo run -p craigmont-api &
//! cargo run -p craigmont-merchant &
//!
//! # Run integration tests
//! cargo test -p craigmont-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `api_graphql` - GraphQL endpoint tests against the review API
//! - `merchant_dashboard` - Rendered page tests against the dashboard
//!
//! Tests are `#[ignore]`d by default because they need both binaries
//! running; the API should be freshly started so the seeded state matches
//! the assertions.

/// Base URL for the review API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("REVIEWS_API_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Base URL for the merchant dashboard (configurable via environment).
#[must_use]
pub fn merchant_base_url() -> String {
    std::env::var("MERCHANT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}
