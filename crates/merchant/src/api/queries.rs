//! GraphQL documents and wire types for the review API.
//!
//! Documents are plain `&str` constants; the schema is small enough that
//! variables and response rows are written out by hand next to the queries
//! they belong to.

use craigmont_core::ReviewStatus;
use serde::{Deserialize, Serialize};

/// Field selection for the review list page.
pub const REVIEWS_QUERY: &str = "\
query ReviewsQuery {
  reviews {
    id
    title
    status
    date
    customer {
      name
    }
    product {
      name
    }
  }
}";

/// Field selection for the review detail page.
pub const REVIEW_QUERY: &str = "\
query ReviewQuery($id: Int!) {
  review(id: $id) {
    id
    rating
    title
    content
    status
    date
    customer {
      name
      email
    }
    product {
      name
      reviewCount
      averageRating
    }
  }
}";

/// Field selection for the settings form.
pub const SETTINGS_QUERY: &str = "\
query SettingsQuery {
  settings {
    autoPublish
    emailNotifications
    email
  }
}";

/// Wholesale settings replacement.
pub const UPDATE_SETTINGS_MUTATION: &str = "\
mutation UpdateSettings($autoPublish: Boolean, $emailNotifications: Boolean, $email: String) {
  updateSettings(autoPublish: $autoPublish, emailNotifications: $emailNotifications, email: $email) {
    autoPublish
    emailNotifications
    email
  }
}";

// =============================================================================
// Variables
// =============================================================================

/// Empty variables object for operations that take none.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NoVariables {}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReviewVariables {
    pub id: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsVariables {
    pub auto_publish: bool,
    pub email_notifications: bool,
    pub email: String,
}

// =============================================================================
// Response rows (field names as they appear on the wire)
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewsData {
    pub reviews: Vec<ReviewRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRow {
    pub id: i32,
    pub title: String,
    pub status: ReviewStatus,
    pub date: String,
    pub customer: CustomerName,
    pub product: ProductName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerName {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductName {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewData {
    pub review: Option<ReviewDetailRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewDetailRow {
    pub id: i32,
    pub rating: i32,
    pub title: String,
    pub content: String,
    pub status: ReviewStatus,
    pub date: String,
    pub customer: CustomerRow,
    pub product: ProductRow,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRow {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow {
    pub name: String,
    pub average_rating: f64,
    pub review_count: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettingsData {
    pub settings: SettingsRow,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRow {
    pub auto_publish: bool,
    pub email_notifications: bool,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSettingsData {
    #[serde(rename = "updateSettings")]
    pub update_settings: SettingsRow,
}
