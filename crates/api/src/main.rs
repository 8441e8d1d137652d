//! Craigmont Review API - Mock GraphQL review service.
//!
//! This binary serves the review GraphQL endpoint on port 3001.
//!
//! # Architecture
//!
//! - Axum web framework hosting an async-graphql schema
//! - In-memory review store seeded at startup (two records)
//! - Mutable settings singleton replaced wholesale by `updateSettings`
//! - GraphiQL explorer served alongside the endpoint
//!
//! All state is process memory and is lost on restart; there is no
//! persistence layer, no authentication, and no pagination.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod graphql;
mod model;
mod routes;
mod state;
mod store;

use config::ApiConfig;
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ApiConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "craigmont_api=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build application state (seeds the store)
    let state = AppState::new(config);
    tracing::info!(
        reviews = state.store().reviews().len(),
        "Review store seeded"
    );

    // Build router
    // The dashboard is served from a different origin, so the API allows
    // cross-origin requests.
    let app = Router::new()
        .merge(routes::router(&state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = state.config().socket_addr();
    tracing::info!("review api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
