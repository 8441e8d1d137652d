//! Review list and detail routes.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::api::types::{ReviewDetail, ReviewSummary};
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

// =============================================================================
// Templates
// =============================================================================

/// Review list page template.
#[derive(Template, WebTemplate)]
#[template(path = "reviews/index.html")]
pub struct ReviewListTemplate {
    pub current_path: &'static str,
    pub reviews: Vec<ReviewSummary>,
}

/// Review detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "reviews/detail.html")]
pub struct ReviewDetailTemplate {
    pub current_path: &'static str,
    pub review: ReviewDetail,
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "reviews/not_found.html")]
pub struct NotFoundTemplate {
    pub current_path: &'static str,
}

// =============================================================================
// Handlers
// =============================================================================

/// Render the review list.
///
/// GET /
#[instrument(skip(state))]
pub async fn review_list(State(state): State<AppState>) -> Result<ReviewListTemplate> {
    let reviews = state.reviews().reviews().await?;

    Ok(ReviewListTemplate {
        current_path: "/",
        reviews,
    })
}

/// Render a single review.
///
/// An unknown id is a valid outcome, not an error: the API resolves the
/// review to `null` and this handler renders the not-found view with a 404.
///
/// GET /reviews/{id}
#[instrument(skip(state))]
pub async fn review_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response> {
    let Some(review) = state.reviews().review(id).await? else {
        tracing::debug!(id, "Review not found");
        return Ok((
            StatusCode::NOT_FOUND,
            NotFoundTemplate {
                current_path: "/",
            },
        )
            .into_response());
    };

    Ok(ReviewDetailTemplate {
        current_path: "/",
        review,
    }
    .into_response())
}

/// Catch-all for unknown paths.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate { current_path: "/" },
    )
        .into_response()
}
