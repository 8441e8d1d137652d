//! Review publication status.

use serde::{Deserialize, Serialize};

/// Publication status of a review.
///
/// Reviews are either visible to shoppers (`published`) or held back
/// (`unpublished`). The wire format uses the lowercase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Published,
    #[default]
    Unpublished,
}

impl ReviewStatus {
    /// Whether the review is visible to shoppers.
    #[must_use]
    pub const fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Published => write!(f, "published"),
            Self::Unpublished => write!(f, "unpublished"),
        }
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "published" => Ok(Self::Published),
            "unpublished" => Ok(Self::Unpublished),
            _ => Err(format!("invalid review status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_from_str() {
        for status in [ReviewStatus::Published, ReviewStatus::Unpublished] {
            let parsed: ReviewStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("pending".parse::<ReviewStatus>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ReviewStatus::Published).unwrap();
        assert_eq!(json, "\"published\"");

        let parsed: ReviewStatus = serde_json::from_str("\"unpublished\"").unwrap();
        assert_eq!(parsed, ReviewStatus::Unpublished);
    }

    #[test]
    fn test_is_published() {
        assert!(ReviewStatus::Published.is_published());
        assert!(!ReviewStatus::Unpublished.is_published());
    }
}
