//! GraphQL object types for the review schema.
//!
//! These are wire-facing types, kept separate from the domain model the
//! store holds; conversions happen at the gateway boundary.

use async_graphql::SimpleObject;

use crate::model;

/// A product under review, with precomputed aggregates.
#[derive(Debug, Clone, SimpleObject)]
pub struct Product {
    pub name: String,
    pub average_rating: f64,
    pub review_count: i32,
}

/// The customer who wrote a review.
#[derive(Debug, Clone, SimpleObject)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

/// A customer review of a product.
#[derive(Debug, Clone, SimpleObject)]
pub struct Review {
    pub id: i32,
    pub rating: i32,
    pub title: String,
    pub content: String,
    pub customer: Customer,
    pub product: Product,
    pub status: String,
    pub date: String,
}

/// Merchant notification settings.
#[derive(Debug, Clone, SimpleObject)]
pub struct Settings {
    pub auto_publish: bool,
    pub email_notifications: bool,
    pub email: String,
}

impl From<&model::Review> for Review {
    fn from(review: &model::Review) -> Self {
        Self {
            id: review.id.as_i32(),
            rating: review.rating.as_i32(),
            title: review.title.clone(),
            content: review.content.clone(),
            customer: Customer {
                name: review.customer.name.clone(),
                email: review.customer.email.to_string(),
            },
            product: Product {
                name: review.product.name.clone(),
                average_rating: review.product.average_rating,
                review_count: review.product.review_count,
            },
            status: review.status.to_string(),
            date: review.date.clone(),
        }
    }
}

impl From<model::ReviewSettings> for Settings {
    fn from(settings: model::ReviewSettings) -> Self {
        Self {
            auto_publish: settings.auto_publish,
            email_notifications: settings.email_notifications,
            email: settings.email,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::seed_reviews;

    #[test]
    fn test_review_conversion() {
        let reviews = seed_reviews();
        let converted = Review::from(reviews.first().unwrap());
        assert_eq!(converted.id, 341);
        assert_eq!(converted.rating, 5);
        assert_eq!(converted.status, "published");
        assert_eq!(converted.customer.email, "mae.jemison@gmail.com");
        assert_eq!(converted.product.review_count, 6);
    }

    #[test]
    fn test_settings_conversion() {
        let converted = Settings::from(crate::model::ReviewSettings {
            auto_publish: true,
            email_notifications: true,
            email: "x@y.com".to_owned(),
        });
        assert!(converted.auto_publish);
        assert!(converted.email_notifications);
        assert_eq!(converted.email, "x@y.com");
    }
}
