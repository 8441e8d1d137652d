//! Domain model for the review store.
//!
//! Reviews are seeded once at startup and never mutated; settings are a
//! process-wide singleton replaced wholesale by the update operation.

use craigmont_core::{Email, Rating, ReviewId, ReviewStatus};

/// A customer review of a product.
///
/// Customer and product are embedded values with no identity of their own;
/// the product's aggregates (`average_rating`, `review_count`) are
/// precomputed in the seed, not derived from the review collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub rating: Rating,
    pub title: String,
    pub content: String,
    pub customer: Customer,
    pub product: Product,
    pub status: ReviewStatus,
    /// Display string, not a parsed temporal value.
    pub date: String,
}

/// The customer who wrote a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub email: Email,
}

/// The product a review is about.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub average_rating: f64,
    pub review_count: i32,
}

/// Merchant notification settings.
///
/// Any combination of values is accepted here, including notifications
/// enabled with an empty email; the dashboard form is the only layer that
/// enforces the email invariant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewSettings {
    pub auto_publish: bool,
    pub email_notifications: bool,
    pub email: String,
}

/// The two seeded reviews, in insertion order.
#[must_use]
pub fn seed_reviews() -> Vec<Review> {
    vec![
        Review {
            id: ReviewId::new(341),
            rating: Rating::new(5).expect("seed rating in range"),
            title: "Seriously amazing!".to_owned(),
            content: "No joke, the best hair pomade I have ever used. My hair typically \
                      gets a little too wavy and unruly for the hairstyle I have been \
                      going with, but the Pomade Paste totally gave me control over my \
                      hair. The hold is amazing, plus it keeps a great 'dry-look' to my \
                      hair which I like. And lastly, the pomade smells bomb. Seriously \
                      it's the best thing you could do for your hair."
                .to_owned(),
            customer: Customer {
                name: "Mae Jemison".to_owned(),
                email: Email::parse("mae.jemison@gmail.com").expect("seed email is valid"),
            },
            product: Product {
                name: "Pomade Paste".to_owned(),
                average_rating: 4.4,
                review_count: 6,
            },
            status: ReviewStatus::Published,
            date: "Mar 18, 6: 21pm".to_owned(),
        },
        Review {
            id: ReviewId::new(256),
            rating: Rating::new(4).expect("seed rating in range"),
            title: "Very nice with a lovely smell".to_owned(),
            content: "The Pomade Cream smells nice and leaves the hair with a nice \
                      finish. I have also been using it on my beard and it is doing a \
                      great job of keeping it tamed! Strongly recommend the product (N1) \
                      and I am looking forward to see what other products Craigmont is \
                      going to create."
                .to_owned(),
            customer: Customer {
                name: "Ellen Ochoa".to_owned(),
                email: Email::parse("ellen.ochoa@gmail.com").expect("seed email is valid"),
            },
            product: Product {
                name: "Pomade Cream".to_owned(),
                average_rating: 3.6,
                review_count: 4,
            },
            status: ReviewStatus::Unpublished,
            date: "Mar 24, 12: 13pm".to_owned(),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_two_reviews_in_order() {
        let reviews = seed_reviews();
        let ids: Vec<i32> = reviews.iter().map(|r| r.id.as_i32()).collect();
        assert_eq!(ids, vec![341, 256]);
    }

    #[test]
    fn test_seed_field_values() {
        let reviews = seed_reviews();
        let first = reviews.first().unwrap();
        assert_eq!(first.title, "Seriously amazing!");
        assert_eq!(first.rating.stars(), 5);
        assert_eq!(first.status, ReviewStatus::Published);
        assert_eq!(first.customer.name, "Mae Jemison");
        assert_eq!(first.product.name, "Pomade Paste");
        assert!((first.product.average_rating - 4.4).abs() < f64::EPSILON);

        let second = reviews.get(1).unwrap();
        assert_eq!(second.rating.stars(), 4);
        assert_eq!(second.status, ReviewStatus::Unpublished);
        assert_eq!(second.product.review_count, 4);
    }

    #[test]
    fn test_default_settings() {
        let settings = ReviewSettings::default();
        assert!(!settings.auto_publish);
        assert!(!settings.email_notifications);
        assert_eq!(settings.email, "");
    }
}
