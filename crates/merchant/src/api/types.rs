//! Dashboard-facing view types converted from raw wire rows.

use craigmont_core::{Rating, RatingError, ReviewStatus};

use super::queries::{ReviewDetailRow, ReviewRow, SettingsRow, UpdateSettingsVariables};

/// One row of the review list.
#[derive(Debug, Clone)]
pub struct ReviewSummary {
    pub id: i32,
    pub title: String,
    pub status: ReviewStatus,
    pub date: String,
    pub customer_name: String,
    pub product_name: String,
}

impl From<ReviewRow> for ReviewSummary {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            status: row.status,
            date: row.date,
            customer_name: row.customer.name,
            product_name: row.product.name,
        }
    }
}

/// A fully loaded review for the detail page.
#[derive(Debug, Clone)]
pub struct ReviewDetail {
    pub id: i32,
    pub rating: Rating,
    pub title: String,
    pub content: String,
    pub status: ReviewStatus,
    pub date: String,
    pub customer: CustomerView,
    pub product: ProductView,
}

#[derive(Debug, Clone)]
pub struct CustomerView {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct ProductView {
    pub name: String,
    pub average_rating: f64,
    pub review_count: i32,
}

impl TryFrom<ReviewDetailRow> for ReviewDetail {
    type Error = RatingError;

    fn try_from(row: ReviewDetailRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            rating: Rating::new(row.rating)?,
            title: row.title,
            content: row.content,
            status: row.status,
            date: row.date,
            customer: CustomerView {
                name: row.customer.name,
                email: row.customer.email,
            },
            product: ProductView {
                name: row.product.name,
                average_rating: row.product.average_rating,
                review_count: row.product.review_count,
            },
        })
    }
}

/// The merchant notification settings as the dashboard sees them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationSettings {
    pub auto_publish: bool,
    pub email_notifications: bool,
    pub email: String,
}

impl From<SettingsRow> for NotificationSettings {
    fn from(row: SettingsRow) -> Self {
        Self {
            auto_publish: row.auto_publish,
            email_notifications: row.email_notifications,
            email: row.email,
        }
    }
}

impl From<NotificationSettings> for UpdateSettingsVariables {
    fn from(settings: NotificationSettings) -> Self {
        Self {
            auto_publish: settings.auto_publish,
            email_notifications: settings.email_notifications,
            email: settings.email,
        }
    }
}
