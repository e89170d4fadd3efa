//! Per-criterion importance weights.
//!
//! A [`WeightVector`] always carries all seven criteria, so lookups cannot
//! miss. Values supplied by callers are validated into `[0.0, 1.0]`; the
//! household adjustment policy may push individual weights past `1.0` via
//! [`WeightVector::adjusted`].

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Criterion;

/// Importance multipliers keyed by [`Criterion`].
///
/// # Examples
/// ```
/// use papss_core::{Criterion, WeightVector};
///
/// let weights = WeightVector::zero()
///     .with_weight(Criterion::Schools, 0.8)
///     .with_weight(Criterion::Price, 0.4);
/// assert_eq!(weights.weight(Criterion::Schools), 0.8);
/// assert_eq!(weights.weight(Criterion::Nature), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "BTreeMap<Criterion, f64>",
        into = "BTreeMap<Criterion, f64>"
    )
)]
pub struct WeightVector {
    transport: f64,
    schools: f64,
    safety: f64,
    nature: f64,
    price: f64,
    dynamism: f64,
    noise_sensitivity: f64,
}

/// Errors raised while validating caller-supplied weights.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WeightError {
    /// A weight map omitted one of the seven criteria.
    #[error("weight for {criterion} is missing")]
    Missing {
        /// Criterion without a value.
        criterion: Criterion,
    },
    /// A weight was NaN or infinite.
    #[error("weight for {criterion} must be finite")]
    NotFinite {
        /// Offending criterion.
        criterion: Criterion,
    },
    /// A weight fell outside `[0.0, 1.0]`.
    #[error("weight for {criterion} must be between 0.0 and 1.0, got {value}")]
    OutOfRange {
        /// Offending criterion.
        criterion: Criterion,
        /// Rejected value.
        value: f64,
    },
}

impl WeightVector {
    /// A vector with every weight set to zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self::uniform(0.0)
    }

    /// A vector with the same weight for every criterion.
    #[must_use]
    pub const fn uniform(weight: f64) -> Self {
        Self {
            transport: weight,
            schools: weight,
            safety: weight,
            nature: weight,
            price: weight,
            dynamism: weight,
            noise_sensitivity: weight,
        }
    }

    /// Return the weight for a criterion.
    #[must_use]
    pub const fn weight(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Transport => self.transport,
            Criterion::Schools => self.schools,
            Criterion::Safety => self.safety,
            Criterion::Nature => self.nature,
            Criterion::Price => self.price,
            Criterion::Dynamism => self.dynamism,
            Criterion::NoiseSensitivity => self.noise_sensitivity,
        }
    }

    const fn slot(&mut self, criterion: Criterion) -> &mut f64 {
        match criterion {
            Criterion::Transport => &mut self.transport,
            Criterion::Schools => &mut self.schools,
            Criterion::Safety => &mut self.safety,
            Criterion::Nature => &mut self.nature,
            Criterion::Price => &mut self.price,
            Criterion::Dynamism => &mut self.dynamism,
            Criterion::NoiseSensitivity => &mut self.noise_sensitivity,
        }
    }

    /// Insert or update a weight.
    ///
    /// Values are clamped into `0.0..=1.0`; non-finite values become `0.0`.
    pub fn set_weight(&mut self, criterion: Criterion, weight: f64) {
        let clamped = if weight.is_finite() {
            weight.clamp(0.0, 1.0)
        } else {
            0.0
        };
        *self.slot(criterion) = clamped;
    }

    /// Set a weight while returning `self` for chaining.
    #[must_use]
    pub fn with_weight(mut self, criterion: Criterion, weight: f64) -> Self {
        self.set_weight(criterion, weight);
        self
    }

    /// Validate and set a weight, returning `self` for chaining.
    ///
    /// # Errors
    /// Returns [`WeightError::NotFinite`] or [`WeightError::OutOfRange`] when
    /// the value is unusable.
    pub fn try_with_weight(mut self, criterion: Criterion, weight: f64) -> Result<Self, WeightError> {
        if !weight.is_finite() {
            return Err(WeightError::NotFinite { criterion });
        }
        if !(0.0..=1.0).contains(&weight) {
            return Err(WeightError::OutOfRange {
                criterion,
                value: weight,
            });
        }
        *self.slot(criterion) = weight;
        Ok(self)
    }

    /// Return a copy with `delta` added to one weight, without clamping.
    #[expect(
        clippy::float_arithmetic,
        reason = "adjustments add fixed increments to a weight"
    )]
    #[must_use]
    pub fn adjusted(mut self, criterion: Criterion, delta: f64) -> Self {
        *self.slot(criterion) += delta;
        self
    }

    /// Sum of all seven weights.
    #[expect(
        clippy::float_arithmetic,
        reason = "the composite denominator is the weight total"
    )]
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, weight)| weight).sum()
    }

    /// Iterate over `(criterion, weight)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL
            .into_iter()
            .map(|criterion| (criterion, self.weight(criterion)))
    }
}

impl Default for WeightVector {
    /// Slider positions offered to a first-time visitor.
    fn default() -> Self {
        Self {
            transport: 0.25,
            schools: 0.20,
            safety: 0.15,
            nature: 0.10,
            price: 0.15,
            dynamism: 0.10,
            noise_sensitivity: 0.05,
        }
    }
}

impl TryFrom<BTreeMap<Criterion, f64>> for WeightVector {
    type Error = WeightError;

    fn try_from(map: BTreeMap<Criterion, f64>) -> Result<Self, Self::Error> {
        Criterion::ALL
            .into_iter()
            .try_fold(Self::zero(), |weights, criterion| {
                let value = map
                    .get(&criterion)
                    .copied()
                    .ok_or(WeightError::Missing { criterion })?;
                weights.try_with_weight(criterion, value)
            })
    }
}

impl From<WeightVector> for BTreeMap<Criterion, f64> {
    fn from(weights: WeightVector) -> Self {
        weights.iter().collect()
    }
}
