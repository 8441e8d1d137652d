//! GraphQL query/mutation gateway.
//!
//! Defines the schema contract and routes structured requests to the store.
//! Request shape (unknown fields, missing required arguments, wrong argument
//! types) is validated structurally by the schema before any resolver runs;
//! a failed validation yields a structured error list and no data. A lookup
//! miss, by contrast, resolves to a `null` field, never an error.

pub mod types;

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Result, Schema};
use craigmont_core::ReviewId;

use crate::model::ReviewSettings;
use crate::store::ReviewStore;

use self::types::{Review, Settings};

/// The executable review schema.
pub type ReviewSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over a shared store.
pub fn build_schema(store: Arc<ReviewStore>) -> ReviewSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Root query object.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All reviews, in insertion order.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let store = ctx.data::<Arc<ReviewStore>>()?;
        Ok(store.reviews().iter().map(Review::from).collect())
    }

    /// A single review by id.
    ///
    /// An unknown id resolves to `null` under the `review` field; consumers
    /// branch on nullability, not on error presence.
    async fn review(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Review>> {
        let store = ctx.data::<Arc<ReviewStore>>()?;
        Ok(store.review(ReviewId::new(id)).map(Review::from))
    }

    /// The current merchant settings.
    async fn settings(&self, ctx: &Context<'_>) -> Result<Settings> {
        let store = ctx.data::<Arc<ReviewStore>>()?;
        Ok(Settings::from(store.settings()))
    }
}

/// Root mutation object.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Replace the merchant settings wholesale and return the new state.
    ///
    /// Absent arguments resolve to the field's default value; the result is
    /// always a full replacement, never a merge with prior state.
    async fn update_settings(
        &self,
        ctx: &Context<'_>,
        auto_publish: Option<bool>,
        email_notifications: Option<bool>,
        email: Option<String>,
    ) -> Result<Settings> {
        let store = ctx.data::<Arc<ReviewStore>>()?;
        let next = ReviewSettings {
            auto_publish: auto_publish.unwrap_or_default(),
            email_notifications: email_notifications.unwrap_or_default(),
            email: email.unwrap_or_default(),
        };
        tracing::debug!(
            auto_publish = next.auto_publish,
            email_notifications = next.email_notifications,
            "Replacing settings"
        );
        Ok(Settings::from(store.replace_settings(next)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use async_graphql::{Request, Variables};
    use serde_json::json;

    use super::*;

    fn seeded_schema() -> ReviewSchema {
        build_schema(Arc::new(ReviewStore::seeded()))
    }

    #[tokio::test]
    async fn test_reviews_returns_seed_in_order() {
        let schema = seeded_schema();
        let resp = schema.execute("{ reviews { id title } }").await;
        assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

        let data = resp.data.into_json().unwrap();
        let reviews = data["reviews"].as_array().unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0]["id"], 341);
        assert_eq!(reviews[1]["id"], 256);
    }

    #[tokio::test]
    async fn test_review_by_id_returns_seeded_record() {
        let schema = seeded_schema();
        let resp = schema
            .execute("{ review(id: 341) { title status rating } }")
            .await;
        assert!(resp.errors.is_empty());

        let data = resp.data.into_json().unwrap();
        assert_eq!(data["review"]["title"], "Seriously amazing!");
        assert_eq!(data["review"]["status"], "published");
        assert_eq!(data["review"]["rating"], 5);
    }

    #[tokio::test]
    async fn test_review_accepts_variables() {
        let schema = seeded_schema();
        let request = Request::new(
            "query ReviewQuery($id: Int!) { review(id: $id) { id customer { name email } } }",
        )
        .variables(Variables::from_json(json!({ "id": 256 })));
        let resp = schema.execute(request).await;
        assert!(resp.errors.is_empty());

        let data = resp.data.into_json().unwrap();
        assert_eq!(data["review"]["customer"]["name"], "Ellen Ochoa");
        assert_eq!(data["review"]["customer"]["email"], "ellen.ochoa@gmail.com");
    }

    #[tokio::test]
    async fn test_unknown_review_id_is_null_not_error() {
        let schema = seeded_schema();
        let resp = schema.execute("{ review(id: 999) { title } }").await;
        assert!(resp.errors.is_empty());

        let data = resp.data.into_json().unwrap();
        assert!(data["review"].is_null());
    }

    #[tokio::test]
    async fn test_missing_required_argument_is_rejected() {
        let schema = seeded_schema();
        let resp = schema.execute("{ review { title } }").await;
        assert!(!resp.errors.is_empty());
        assert!(resp.data.into_json().unwrap().is_null());
    }

    #[tokio::test]
    async fn test_unknown_field_is_rejected() {
        let schema = seeded_schema();
        let resp = schema.execute("{ reviews { id sentiment } }").await;
        assert!(!resp.errors.is_empty());
        assert!(resp.data.into_json().unwrap().is_null());
    }

    #[tokio::test]
    async fn test_wrong_argument_type_is_rejected() {
        let schema = seeded_schema();
        let resp = schema.execute(r#"{ review(id: "341") { title } }"#).await;
        assert!(!resp.errors.is_empty());
    }

    #[tokio::test]
    async fn test_settings_defaults() {
        let schema = seeded_schema();
        let resp = schema
            .execute("{ settings { autoPublish emailNotifications email } }")
            .await;
        assert!(resp.errors.is_empty());

        let data = resp.data.into_json().unwrap();
        assert_eq!(data["settings"]["autoPublish"], false);
        assert_eq!(data["settings"]["emailNotifications"], false);
        assert_eq!(data["settings"]["email"], "");
    }

    #[tokio::test]
    async fn test_update_settings_then_query_returns_new_triple() {
        let schema = seeded_schema();
        let resp = schema
            .execute(
                r#"mutation {
                    updateSettings(autoPublish: true, emailNotifications: true, email: "x@y.com") {
                        autoPublish
                        emailNotifications
                        email
                    }
                }"#,
            )
            .await;
        assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

        let data = resp.data.into_json().unwrap();
        assert_eq!(data["updateSettings"]["autoPublish"], true);
        assert_eq!(data["updateSettings"]["emailNotifications"], true);
        assert_eq!(data["updateSettings"]["email"], "x@y.com");

        let resp = schema
            .execute("{ settings { autoPublish emailNotifications email } }")
            .await;
        let data = resp.data.into_json().unwrap();
        assert_eq!(data["settings"]["autoPublish"], true);
        assert_eq!(data["settings"]["emailNotifications"], true);
        assert_eq!(data["settings"]["email"], "x@y.com");
    }

    #[tokio::test]
    async fn test_update_settings_absent_arguments_use_defaults() {
        let schema = seeded_schema();
        schema
            .execute(
                r#"mutation {
                    updateSettings(autoPublish: true, emailNotifications: true, email: "x@y.com") {
                        email
                    }
                }"#,
            )
            .await;

        // A bare update is a full replacement, not a merge.
        let resp = schema
            .execute("mutation { updateSettings { autoPublish emailNotifications email } }")
            .await;
        assert!(resp.errors.is_empty());

        let data = resp.data.into_json().unwrap();
        assert_eq!(data["updateSettings"]["autoPublish"], false);
        assert_eq!(data["updateSettings"]["emailNotifications"], false);
        assert_eq!(data["updateSettings"]["email"], "");
    }

    #[tokio::test]
    async fn test_update_settings_accepts_invalid_combination() {
        // The store performs no validation; the dashboard form is the only
        // layer enforcing the notifications/email invariant.
        let schema = seeded_schema();
        let resp = schema
            .execute(
                r#"mutation {
                    updateSettings(autoPublish: false, emailNotifications: true, email: "") {
                        emailNotifications
                        email
                    }
                }"#,
            )
            .await;
        assert!(resp.errors.is_empty());

        let data = resp.data.into_json().unwrap();
        assert_eq!(data["updateSettings"]["emailNotifications"], true);
        assert_eq!(data["updateSettings"]["email"], "");
    }
}
