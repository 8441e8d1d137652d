//! HTTP route handlers for the merchant dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /               - Review list
//! GET  /reviews/{id}   - Review detail (renders not-found for unknown ids)
//! GET  /settings       - Settings form
//! POST /settings       - Validate and save settings
//! GET  /health         - Health check
//!
//! Any other path renders the not-found view.
//! ```

pub mod reviews;
pub mod settings;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the dashboard router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(reviews::review_list))
        .route("/reviews/{id}", get(reviews::review_detail))
        .route(
            "/settings",
            get(settings::settings_page).post(settings::update_settings),
        )
        .fallback(reviews::not_found)
}
