//! Buyer profiles: budget, target surface, commute tolerance and household
//! ages.
//!
//! Profiles are validated once at construction so the scoring engine can
//! treat every field as trusted.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Age below which a couple counts as a young couple.
pub const YOUNG_COUPLE_AGE: u8 = 35;

/// Search constraints and household details for one buyer.
///
/// # Examples
/// ```
/// use papss_core::{BuyerProfile, HouseholdKind};
///
/// # fn main() -> Result<(), papss_core::ProfileError> {
/// let profile = BuyerProfile::new(600_000.0, 80.0, 45, 32, 5)?;
/// assert_eq!(profile.household_kind(), HouseholdKind::YoungCouple);
/// assert!(BuyerProfile::new(-1.0, 80.0, 45, 32, 5).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBuyerProfile"))]
pub struct BuyerProfile {
    budget: f64,
    surface_area: f64,
    max_commute_minutes: u16,
    couple_age: u8,
    children_age: u8,
}

/// Unvalidated wire form of a [`BuyerProfile`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawBuyerProfile {
    /// Maximum total purchase price.
    pub budget: f64,
    /// Desired living area.
    pub surface_area: f64,
    /// Hard ceiling on the commute.
    pub max_commute_minutes: u16,
    /// Age of the couple.
    pub couple_age: u8,
    /// Age of the children.
    pub children_age: u8,
}

/// Errors returned by [`BuyerProfile::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProfileError {
    /// The budget was zero, negative or not finite.
    #[error("budget must be positive and finite, got {0}")]
    InvalidBudget(f64),
    /// The surface was zero, negative or not finite.
    #[error("surface area must be positive and finite, got {0}")]
    InvalidSurface(f64),
    /// The commute ceiling was zero.
    #[error("maximum commute must be at least one minute")]
    ZeroCommute,
}

/// Coarse household label shown alongside recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HouseholdKind {
    /// Couple younger than [`YOUNG_COUPLE_AGE`].
    YoungCouple,
    /// Any other household.
    Family,
}

impl HouseholdKind {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::YoungCouple => "young couple",
            Self::Family => "family",
        }
    }
}

impl std::fmt::Display for HouseholdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl BuyerProfile {
    /// Validates and constructs a [`BuyerProfile`].
    ///
    /// # Errors
    /// Returns [`ProfileError`] when the budget or surface is not a positive
    /// finite number, or when the commute ceiling is zero.
    pub fn new(
        budget: f64,
        surface_area: f64,
        max_commute_minutes: u16,
        couple_age: u8,
        children_age: u8,
    ) -> Result<Self, ProfileError> {
        if !is_positive(budget) {
            return Err(ProfileError::InvalidBudget(budget));
        }
        if !is_positive(surface_area) {
            return Err(ProfileError::InvalidSurface(surface_area));
        }
        if max_commute_minutes == 0 {
            return Err(ProfileError::ZeroCommute);
        }
        Ok(Self {
            budget,
            surface_area,
            max_commute_minutes,
            couple_age,
            children_age,
        })
    }

    /// Maximum total purchase price.
    #[must_use]
    pub const fn budget(&self) -> f64 {
        self.budget
    }

    /// Desired living area.
    #[must_use]
    pub const fn surface_area(&self) -> f64 {
        self.surface_area
    }

    /// Hard ceiling on the commute, in minutes.
    #[must_use]
    pub const fn max_commute_minutes(&self) -> u16 {
        self.max_commute_minutes
    }

    /// Age of the couple.
    #[must_use]
    pub const fn couple_age(&self) -> u8 {
        self.couple_age
    }

    /// Age of the children.
    #[must_use]
    pub const fn children_age(&self) -> u8 {
        self.children_age
    }

    /// Household label derived from the couple's age.
    #[must_use]
    pub const fn household_kind(&self) -> HouseholdKind {
        if self.couple_age < YOUNG_COUPLE_AGE {
            HouseholdKind::YoungCouple
        } else {
            HouseholdKind::Family
        }
    }
}

impl Default for BuyerProfile {
    /// Sidebar defaults: 600k budget, 80 m², 45 minutes, couple of 32 with a
    /// five-year-old.
    fn default() -> Self {
        Self {
            budget: 600_000.0,
            surface_area: 80.0,
            max_commute_minutes: 45,
            couple_age: 32,
            children_age: 5,
        }
    }
}

impl TryFrom<RawBuyerProfile> for BuyerProfile {
    type Error = ProfileError;

    fn try_from(raw: RawBuyerProfile) -> Result<Self, Self::Error> {
        Self::new(
            raw.budget,
            raw.surface_area,
            raw.max_commute_minutes,
            raw.couple_age,
            raw.children_age,
        )
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(-250_000.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_unusable_budget(#[case] budget: f64) {
        let result = BuyerProfile::new(budget, 80.0, 45, 32, 5);
        assert!(matches!(result, Err(ProfileError::InvalidBudget(_))));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-40.0)]
    fn rejects_unusable_surface(#[case] surface: f64) {
        let result = BuyerProfile::new(600_000.0, surface, 45, 32, 5);
        assert_eq!(result, Err(ProfileError::InvalidSurface(surface)));
    }

    #[rstest]
    fn rejects_zero_commute() {
        let result = BuyerProfile::new(600_000.0, 80.0, 0, 32, 5);
        assert_eq!(result, Err(ProfileError::ZeroCommute));
    }

    #[rstest]
    #[case(25, HouseholdKind::YoungCouple)]
    #[case(34, HouseholdKind::YoungCouple)]
    #[case(35, HouseholdKind::Family)]
    #[case(60, HouseholdKind::Family)]
    fn household_kind_splits_at_thirty_five(#[case] age: u8, #[case] expected: HouseholdKind) {
        let profile = BuyerProfile::new(600_000.0, 80.0, 45, age, 5).expect("valid profile");
        assert_eq!(profile.household_kind(), expected);
    }

    #[rstest]
    fn default_matches_validated_construction() {
        let built = BuyerProfile::new(600_000.0, 80.0, 45, 32, 5).expect("valid profile");
        assert_eq!(BuyerProfile::default(), built);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_validates_fields() {
        let json = r#"{"budget": 500000.0, "surface_area": -3.0,
            "max_commute_minutes": 30, "couple_age": 40, "children_age": 12}"#;
        assert!(serde_json::from_str::<BuyerProfile>(json).is_err());
    }
}
