//! In-memory review store.
//!
//! The store is the authoritative state for the service: a fixed review
//! collection seeded at startup and a single mutable settings record. It is
//! an explicitly owned container (constructed per process, or per test case)
//! rather than module-level state, so tests get isolated instances.

use std::sync::{PoisonError, RwLock};

use craigmont_core::ReviewId;

use crate::model::{Review, ReviewSettings, seed_reviews};

/// Authoritative in-memory state: seeded reviews plus the settings singleton.
///
/// Reviews are immutable after construction, so concurrent reads need no
/// synchronization. Settings have exactly one writer operation
/// ([`replace_settings`](Self::replace_settings)) guarded by an `RwLock`,
/// so a reader never observes a torn mix of old and new field values.
#[derive(Debug)]
pub struct ReviewStore {
    reviews: Vec<Review>,
    settings: RwLock<ReviewSettings>,
}

impl ReviewStore {
    /// Create a store with explicit contents (used by tests).
    #[must_use]
    pub const fn new(reviews: Vec<Review>, settings: ReviewSettings) -> Self {
        Self {
            reviews,
            settings: RwLock::new(settings),
        }
    }

    /// Create a store with the production seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_reviews(), ReviewSettings::default())
    }

    /// All reviews, insertion order. Never fails.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Look up a review by id.
    ///
    /// Returns `None` when no review matches; absence is a valid outcome,
    /// not an error.
    #[must_use]
    pub fn review(&self, id: ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|review| review.id == id)
    }

    /// Snapshot of the current settings.
    #[must_use]
    pub fn settings(&self) -> ReviewSettings {
        // The lock guards a plain struct; even a poisoned lock holds a
        // coherent value, so recover it instead of propagating the panic.
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the settings singleton wholesale and return the new state.
    ///
    /// No field validation happens here; any combination is accepted,
    /// including notifications enabled with an empty email.
    pub fn replace_settings(&self, next: ReviewSettings) -> ReviewSettings {
        let mut guard = self
            .settings
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = next;
        guard.clone()
    }
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self::seeded()
    }
}
