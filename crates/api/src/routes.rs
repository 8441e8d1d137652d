//! HTTP route handlers for the review API.
//!
//! # Route Structure
//!
//! ```text
//! POST /graphql   - Query/mutation endpoint ({query, variables} envelope)
//! GET  /graphql   - Same endpoint for query-string requests
//! GET  /graphiql  - Read-only interactive schema explorer
//! GET  /health    - Health check
//! ```

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::state::AppState;

/// Build the API router.
pub fn router(state: &AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/graphiql", get(graphiql))
        // The GraphQL service handles both GET (query string) and POST (body)
        .route_service("/graphql", GraphQL::new(state.schema().clone()))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Render the GraphiQL explorer pointed at the query endpoint.
///
/// GET /graphiql
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
