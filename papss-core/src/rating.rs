//! Bounded `0..=10` ratings used for town amenities.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound of every rating scale.
pub const RATING_MAX: u8 = 10;

/// An integer rating on the closed `0..=10` scale.
///
/// # Examples
/// ```
/// use papss_core::Rating;
///
/// let rating = Rating::new(7)?;
/// assert_eq!(rating.get(), 7);
/// assert_eq!(rating.inverted().get(), 3);
/// assert!(Rating::new(11).is_err());
/// # Ok::<(), papss_core::RatingError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Rating(u8);

/// Errors returned by [`Rating::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RatingError {
    /// The value exceeded [`RATING_MAX`].
    #[error("rating {value} is outside 0..=10")]
    OutOfRange {
        /// Rejected raw value.
        value: u8,
    },
}

impl Rating {
    /// Validate and wrap a raw rating.
    ///
    /// # Errors
    /// Returns [`RatingError::OutOfRange`] for values above ten.
    pub const fn new(value: u8) -> Result<Self, RatingError> {
        if value > RATING_MAX {
            return Err(RatingError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    /// Wrap a raw rating, saturating at ten.
    #[must_use]
    pub const fn saturating(value: u8) -> Self {
        if value > RATING_MAX {
            Self(RATING_MAX)
        } else {
            Self(value)
        }
    }

    /// Return the raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Mirror the rating around the scale, so `10` becomes `0`.
    #[must_use]
    pub const fn inverted(self) -> Self {
        Self(RATING_MAX.saturating_sub(self.0))
    }

    /// Return the rating as a float for weighted arithmetic.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(10)]
    fn accepts_scale_bounds(#[case] value: u8) {
        assert_eq!(Rating::new(value).map(Rating::get), Ok(value));
    }

    #[rstest]
    fn rejects_values_above_ten() {
        assert_eq!(Rating::new(11), Err(RatingError::OutOfRange { value: 11 }));
    }

    #[rstest]
    fn saturating_caps_at_ten() {
        assert_eq!(Rating::saturating(200).get(), 10);
    }

    #[rstest]
    #[case(0, 10)]
    #[case(6, 4)]
    #[case(10, 0)]
    fn inversion_mirrors_scale(#[case] raw: u8, #[case] expected: u8) {
        assert_eq!(Rating::saturating(raw).inverted().get(), expected);
    }

    #[rstest]
    fn display_shows_scale() {
        assert_eq!(Rating::saturating(8).to_string(), "8/10");
    }
}
