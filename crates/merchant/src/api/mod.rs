//! Review API client implementation.
//!
//! Uses the standard GraphQL HTTP envelope - `graphql_client`'s request and
//! response types with `reqwest` for transport. Queries are plain documents
//! defined in [`queries`]; results are converted into the dashboard view
//! types in [`types`].

pub mod queries;
pub mod types;

use std::sync::Arc;

use graphql_client::{QueryBody, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::instrument;

use craigmont_core::RatingError;

use self::queries::{
    NoVariables, REVIEW_QUERY, REVIEWS_QUERY, ReviewData, ReviewVariables, ReviewsData,
    SETTINGS_QUERY, SettingsData, UPDATE_SETTINGS_MUTATION, UpdateSettingsData,
    UpdateSettingsVariables,
};
use self::types::{NotificationSettings, ReviewDetail, ReviewSummary};

/// Errors from the review API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request failed or the body could not be decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response carried a GraphQL error list.
    #[error("graphql errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The response had neither data nor errors.
    #[error("response contained no data")]
    MissingData,

    /// The API returned a rating outside the 1-5 range.
    #[error("api returned an invalid rating: {0}")]
    InvalidRating(#[from] RatingError),
}

// =============================================================================
// ReviewsClient
// =============================================================================

/// Client for the review GraphQL API.
///
/// Provides typed access to the review list, review lookup, and the
/// settings read/replace operations.
#[derive(Clone)]
pub struct ReviewsClient {
    inner: Arc<ReviewsClientInner>,
}

struct ReviewsClientInner {
    client: reqwest::Client,
    endpoint: String,
}

impl ReviewsClient {
    /// Create a new client against a GraphQL endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ReviewsClientInner {
                client: reqwest::Client::new(),
                endpoint: endpoint.into(),
            }),
        }
    }

    /// Execute a GraphQL operation.
    async fn execute<V, D>(
        &self,
        operation_name: &'static str,
        query: &'static str,
        variables: V,
    ) -> Result<D, ApiError>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        let body = QueryBody {
            variables,
            query,
            operation_name,
        };

        tracing::debug!(operation = operation_name, "Executing GraphQL operation");

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let envelope: Response<D> = response.json().await?;

        if let Some(errors) = envelope.errors
            && !errors.is_empty()
        {
            return Err(ApiError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        envelope.data.ok_or(ApiError::MissingData)
    }

    /// Fetch all reviews for the list page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports errors.
    #[instrument(skip(self))]
    pub async fn reviews(&self) -> Result<Vec<ReviewSummary>, ApiError> {
        let data: ReviewsData = self
            .execute("ReviewsQuery", REVIEWS_QUERY, NoVariables {})
            .await?;
        Ok(data.reviews.into_iter().map(ReviewSummary::from).collect())
    }

    /// Fetch a single review.
    ///
    /// Returns `Ok(None)` when the API resolves the review to `null`; the
    /// caller renders the not-found view from that, not from an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports errors.
    #[instrument(skip(self))]
    pub async fn review(&self, id: i32) -> Result<Option<ReviewDetail>, ApiError> {
        let data: ReviewData = self
            .execute("ReviewQuery", REVIEW_QUERY, ReviewVariables { id })
            .await?;
        data.review
            .map(ReviewDetail::try_from)
            .transpose()
            .map_err(ApiError::from)
    }

    /// Fetch the current settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports errors.
    #[instrument(skip(self))]
    pub async fn settings(&self) -> Result<NotificationSettings, ApiError> {
        let data: SettingsData = self
            .execute("SettingsQuery", SETTINGS_QUERY, NoVariables {})
            .await?;
        Ok(NotificationSettings::from(data.settings))
    }

    /// Replace the settings wholesale and return the new state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API reports errors.
    #[instrument(skip(self, settings))]
    pub async fn update_settings(
        &self,
        settings: NotificationSettings,
    ) -> Result<NotificationSettings, ApiError> {
        let data: UpdateSettingsData = self
            .execute(
                "UpdateSettings",
                UPDATE_SETTINGS_MUTATION,
                UpdateSettingsVariables::from(settings),
            )
            .await?;
        Ok(NotificationSettings::from(data.update_settings))
    }
}
