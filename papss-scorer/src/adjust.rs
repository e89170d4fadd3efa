//! Household weight adjustments.
//!
//! Children's and couple's ages each select at most one rule; both rules may
//! fire for the same profile. The base vector is copied, never mutated.

use log::debug;
use papss_core::{BuyerProfile, Criterion, WeightVector, YOUNG_COUPLE_AGE};

/// Children younger than this favour schools and safety.
pub const YOUNG_CHILDREN_AGE: u8 = 10;
/// Children younger than this (and at least [`YOUNG_CHILDREN_AGE`]) favour
/// transport and dynamism.
pub const TEEN_CHILDREN_AGE: u8 = 16;
/// Couples older than this favour nature and quiet.
pub const SENIOR_COUPLE_AGE: u8 = 45;

type Increments = &'static [(Criterion, f64)];

const YOUNG_CHILDREN: Increments = &[(Criterion::Schools, 0.10), (Criterion::Safety, 0.05)];
const TEEN_CHILDREN: Increments = &[(Criterion::Transport, 0.10), (Criterion::Dynamism, 0.05)];
const YOUNG_COUPLE: Increments = &[(Criterion::Dynamism, 0.10)];
const SENIOR_COUPLE: Increments = &[
    (Criterion::Nature, 0.10),
    (Criterion::NoiseSensitivity, 0.05),
];

const fn children_increments(children_age: u8) -> Increments {
    if children_age < YOUNG_CHILDREN_AGE {
        YOUNG_CHILDREN
    } else if children_age < TEEN_CHILDREN_AGE {
        TEEN_CHILDREN
    } else {
        &[]
    }
}

const fn couple_increments(couple_age: u8) -> Increments {
    if couple_age < YOUNG_COUPLE_AGE {
        YOUNG_COUPLE
    } else if couple_age > SENIOR_COUPLE_AGE {
        SENIOR_COUPLE
    } else {
        &[]
    }
}

/// Apply the household rules to a copy of `base`.
///
/// # Examples
/// ```
/// use papss_core::{Criterion, WeightVector};
/// use papss_scorer::adjust_weights;
///
/// let base = WeightVector::zero();
/// let adjusted = adjust_weights(&base, 40, 17);
/// assert_eq!(adjusted, base);
///
/// let adjusted = adjust_weights(&base, 50, 17);
/// assert_eq!(adjusted.weight(Criterion::Nature), 0.10);
/// assert_eq!(adjusted.weight(Criterion::NoiseSensitivity), 0.05);
/// ```
#[must_use]
pub fn adjust_weights(base: &WeightVector, couple_age: u8, children_age: u8) -> WeightVector {
    children_increments(children_age)
        .iter()
        .chain(couple_increments(couple_age))
        .fold(*base, |weights, &(criterion, delta)| {
            debug!("household rule adds {delta} to {criterion} (couple {couple_age}, children {children_age})");
            weights.adjusted(criterion, delta)
        })
}

/// Apply the household rules using the ages recorded on `profile`.
#[must_use]
pub fn adjust_for_profile(base: &WeightVector, profile: &BuyerProfile) -> WeightVector {
    adjust_weights(base, profile.couple_age(), profile.children_age())
}
