//! Star rating type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when constructing a [`Rating`] outside the 1-5 range.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("rating must be between 1 and 5 stars, got {0}")]
pub struct RatingError(pub i32);

/// A review star rating.
///
/// Ratings are whole stars between 1 and 5 inclusive. The bounds are
/// enforced at construction so a malformed rating cannot exist anywhere
/// in the system.
///
/// ## Examples
///
/// ```
/// use craigmont_core::Rating;
///
/// let rating = Rating::new(4).unwrap();
/// assert_eq!(rating.stars(), 4);
///
/// assert!(Rating::new(0).is_err());
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Minimum number of stars.
    pub const MIN: u8 = 1;
    /// Maximum number of stars.
    pub const MAX: u8 = 5;

    /// Create a `Rating` from a star count.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError`] if `stars` is outside 1-5.
    pub const fn new(stars: i32) -> Result<Self, RatingError> {
        if stars < Self::MIN as i32 || stars > Self::MAX as i32 {
            return Err(RatingError(stars));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let stars = stars as u8;
        Ok(Self(stars))
    }

    /// The number of filled stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }

    /// The rating as an `i32`, for wire formats that carry plain integers.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0 as i32
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Rating {
    type Error = RatingError;

    fn try_from(stars: i32) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<Rating> for i32 {
    fn from(rating: Rating) -> Self {
        rating.as_i32()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_in_range() {
        for stars in 1..=5 {
            let rating = Rating::new(stars).unwrap();
            assert_eq!(rating.as_i32(), stars);
        }
    }

    #[test]
    fn test_new_out_of_range() {
        assert_eq!(Rating::new(0), Err(RatingError(0)));
        assert_eq!(Rating::new(6), Err(RatingError(6)));
        assert_eq!(Rating::new(-1), Err(RatingError(-1)));
    }

    #[test]
    fn test_error_message() {
        let err = Rating::new(9).unwrap_err();
        assert_eq!(
            err.to_string(),
            "rating must be between 1 and 5 stars, got 9"
        );
    }

    #[test]
    fn test_try_from() {
        let rating = Rating::try_from(5).unwrap();
        assert_eq!(rating.stars(), 5);
        assert!(Rating::try_from(0).is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let rating = Rating::new(4).unwrap();
        let json = serde_json::to_string(&rating).unwrap();
        assert_eq!(json, "4");

        let parsed: Rating = serde_json::from_str("5").unwrap();
        assert_eq!(parsed.stars(), 5);
    }

    #[test]
    fn test_ordering() {
        assert!(Rating::new(2).unwrap() < Rating::new(5).unwrap());
    }
}
