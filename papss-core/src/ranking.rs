//! Rank candidate towns for a buyer.
//!
//! The [`Ranker`] trait turns a [`TownStore`](crate::TownStore), a
//! [`BuyerProfile`](crate::BuyerProfile) and a
//! [`WeightVector`](crate::WeightVector) into an ordered list of
//! [`ScoredTown`] values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BuyerProfile, Criterion, Town, TownStore, WeightVector};

/// Upper bound of every derived score.
pub const SCORE_MAX: f64 = 10.0;

/// A town that survived filtering, with its derived scores.
///
/// Created fresh per ranking call and never cached.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredTown {
    /// The underlying town record.
    pub town: Town,
    /// Affordability relative to the other survivors; higher is cheaper.
    pub price_score: f64,
    /// Quietness; higher is quieter.
    pub quiet_score: f64,
    /// Weighted composite in `0.0..=10.0`, rounded to two decimals.
    pub composite_score: f64,
}

impl ScoredTown {
    /// Value the town contributes for `criterion` before weighting.
    ///
    /// # Examples
    /// ```
    /// use papss_core::{Criterion, MemoryTownStore, ScoredTown};
    ///
    /// let town = MemoryTownStore::demo().get("Clichy").cloned().unwrap();
    /// let scored = ScoredTown {
    ///     town,
    ///     price_score: 5.0,
    ///     quiet_score: 5.0,
    ///     composite_score: 6.43,
    /// };
    /// assert_eq!(scored.criterion_value(Criterion::Transport), 9.0);
    /// assert_eq!(scored.criterion_value(Criterion::Price), 5.0);
    /// ```
    #[must_use]
    pub fn criterion_value(&self, criterion: Criterion) -> f64 {
        let amenities = &self.town.amenities;
        match criterion {
            Criterion::Transport => amenities.transport.as_f64(),
            Criterion::Schools => amenities.schools.as_f64(),
            Criterion::Safety => amenities.safety.as_f64(),
            Criterion::Nature => amenities.nature.as_f64(),
            Criterion::Dynamism => amenities.dynamism.as_f64(),
            Criterion::Price => self.price_score,
            Criterion::NoiseSensitivity => self.quiet_score,
        }
    }

    /// Per-criterion values in canonical order.
    pub fn criterion_values(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL
            .into_iter()
            .map(|criterion| (criterion, self.criterion_value(criterion)))
    }
}

/// Produce an ordered ranking of towns for a buyer.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and pure: the same
/// inputs always yield the same ordered output, and the store is never
/// modified. An empty result is a valid outcome meaning "no town matches".
///
/// # Examples
///
/// ```rust
/// use papss_core::{BuyerProfile, MemoryTownStore, Ranker, ScoredTown, TownStore, WeightVector};
///
/// struct Alphabetical;
///
/// impl Ranker for Alphabetical {
///     fn rank(
///         &self,
///         store: &dyn TownStore,
///         _profile: &BuyerProfile,
///         _weights: &WeightVector,
///     ) -> Vec<ScoredTown> {
///         let mut towns: Vec<_> = store
///             .towns()
///             .map(|town| ScoredTown {
///                 town: town.clone(),
///                 price_score: 5.0,
///                 quiet_score: 5.0,
///                 composite_score: 5.0,
///             })
///             .collect();
///         towns.sort_by(|a, b| a.town.name.cmp(&b.town.name));
///         towns
///     }
/// }
///
/// let ranked = Alphabetical.rank(
///     &MemoryTownStore::demo(),
///     &BuyerProfile::default(),
///     &WeightVector::default(),
/// );
/// assert_eq!(ranked[0].town.name, "Asnières-sur-Seine");
/// ```
pub trait Ranker: Send + Sync {
    /// Rank the towns of `store` for `profile` using `weights`.
    fn rank(
        &self,
        store: &dyn TownStore,
        profile: &BuyerProfile,
        weights: &WeightVector,
    ) -> Vec<ScoredTown>;

    /// Clamp a raw score into `0.0..=10.0`.
    ///
    /// Returns `0.0` for non-finite values.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, SCORE_MAX)
    }
}
