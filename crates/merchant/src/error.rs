//! Unified error handling for the dashboard.
//!
//! Provides a unified `AppError` type for route handlers; API failures are
//! logged and mapped to client-safe responses. All route handlers should
//! return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::ApiError;

/// Application-level error type for the dashboard.
///
/// Every page is rendered from a review API response, so the only failure
/// a handler can hit is the API call itself; lookup misses are not errors
/// (they render the not-found view).
#[derive(Debug, Error)]
pub enum AppError {
    /// Review API operation failed.
    #[error("Review API error: {0}")]
    Api(#[from] ApiError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request error");

        // Don't expose transport details to clients
        (StatusCode::BAD_GATEWAY, "Review service unavailable").into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Api(ApiError::MissingData);
        assert_eq!(err.to_string(), "Review API error: response contained no data");
    }

    #[test]
    fn test_app_error_maps_to_bad_gateway() {
        let response = AppError::Api(ApiError::MissingData).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
