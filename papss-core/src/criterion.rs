//! The closed set of criteria a buyer can weight.
//!
//! The enum offers compile-time safety for weight lookups.
//!
//! # Examples
//! ```
//! use papss_core::Criterion;
//!
//! assert_eq!(Criterion::NoiseSensitivity.as_str(), "noise_sensitivity");
//! assert_eq!(Criterion::Price.to_string(), "price");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A criterion contributing to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Criterion {
    /// Public transport coverage.
    Transport,
    /// School quality.
    Schools,
    /// Perceived safety.
    Safety,
    /// Green space and nature access.
    Nature,
    /// Affordability relative to the other candidates.
    Price,
    /// Economic and cultural dynamism.
    Dynamism,
    /// Preference for quiet surroundings.
    NoiseSensitivity,
}

/// Error returned when parsing an unknown criterion name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown criterion '{0}'")]
pub struct CriterionParseError(pub String);

impl Criterion {
    /// Every criterion in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Transport,
        Self::Schools,
        Self::Safety,
        Self::Nature,
        Self::Price,
        Self::Dynamism,
        Self::NoiseSensitivity,
    ];

    /// Number of criteria.
    pub const COUNT: usize = Self::ALL.len();

    /// Return the criterion as a snake-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Schools => "schools",
            Self::Safety => "safety",
            Self::Nature => "nature",
            Self::Price => "price",
            Self::Dynamism => "dynamism",
            Self::NoiseSensitivity => "noise_sensitivity",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Criterion {
    type Err = CriterionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == normalised)
            .ok_or_else(|| CriterionParseError(s.to_owned()))
    }
}
