//! The filter → derive → sort pipeline.

use log::{debug, warn};
use papss_core::{BuyerProfile, Criterion, Ranker, ScoredTown, Town, TownStore, WeightVector};

use crate::adjust::adjust_for_profile;
use crate::filter::{Rejection, partition};
use crate::normalise::{affordability_scores, quiet_score, round_hundredths};

/// Full outcome of a scoring call.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    /// Survivors ordered by descending composite score.
    pub ranked: Vec<ScoredTown>,
    /// Towns excluded by the filters, in input order.
    pub rejected: Vec<Rejection>,
    /// Weights after the household adjustments were applied.
    pub applied_weights: WeightVector,
}

impl ScoreReport {
    /// Report whether no town matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Rank `towns` for `profile`.
///
/// Towns over budget or beyond the commute ceiling are dropped; survivors
/// receive price and quiet scores and a weighted composite, and come back
/// sorted by descending composite. Ties keep input order. An empty result
/// means no town matched.
///
/// # Examples
/// ```
/// use papss_core::{BuyerProfile, MemoryTownStore, TownStore, WeightVector};
/// use papss_scorer::score;
///
/// let store = MemoryTownStore::demo();
/// let profile = BuyerProfile::new(600_000.0, 80.0, 10, 32, 5)?;
/// assert!(score(store.towns(), &profile, &WeightVector::default()).is_empty());
/// # Ok::<(), papss_core::ProfileError>(())
/// ```
#[must_use]
pub fn score<'a, I>(towns: I, profile: &BuyerProfile, weights: &WeightVector) -> Vec<ScoredTown>
where
    I: IntoIterator<Item = &'a Town>,
{
    score_with_report(towns, profile, weights).ranked
}

/// Rank `towns` for `profile`, keeping the rejections and applied weights.
#[must_use]
pub fn score_with_report<'a, I>(
    towns: I,
    profile: &BuyerProfile,
    weights: &WeightVector,
) -> ScoreReport
where
    I: IntoIterator<Item = &'a Town>,
{
    let applied_weights = adjust_for_profile(weights, profile);
    let (survivors, rejected) = partition(towns, profile);
    debug!(
        "{} towns survive filtering, {} rejected",
        survivors.len(),
        rejected.len()
    );

    let ranked = if survivors.is_empty() {
        Vec::new()
    } else {
        rank_survivors(&survivors, &applied_weights)
    };

    ScoreReport {
        ranked,
        rejected,
        applied_weights,
    }
}

fn rank_survivors(survivors: &[&Town], weights: &WeightVector) -> Vec<ScoredTown> {
    let prices: Vec<f64> = survivors.iter().map(|town| town.price_per_area).collect();
    let (effective, denominator) = effective_weights(weights);

    let mut ranked: Vec<ScoredTown> = survivors
        .iter()
        .zip(affordability_scores(&prices))
        .map(|(town, price_score)| {
            let mut scored = ScoredTown {
                town: (*town).clone(),
                price_score,
                quiet_score: quiet_score(town.amenities.noise),
                composite_score: 0.0,
            };
            scored.composite_score = composite(&scored, &effective, denominator);
            scored
        })
        .collect();

    // `sort_by` is stable, so equal scores keep survivor order.
    ranked.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));
    ranked
}

/// Weights and denominator used for the composite.
///
/// An all-zero vector counts every criterion once, so the composite becomes
/// the unweighted sum of the seven values before clamping.
fn effective_weights(weights: &WeightVector) -> (WeightVector, f64) {
    let total = weights.sum();
    if total == 0.0 {
        warn!("all weights are zero; composite falls back to an unweighted sum");
        (WeightVector::uniform(1.0), 1.0)
    } else {
        (*weights, total)
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "the composite is a weighted average"
)]
fn composite(scored: &ScoredTown, weights: &WeightVector, denominator: f64) -> f64 {
    let weighted: f64 = Criterion::ALL
        .into_iter()
        .map(|criterion| scored.criterion_value(criterion) * weights.weight(criterion))
        .sum();
    <CompositeScorer as Ranker>::sanitise(round_hundredths(weighted / denominator))
}

/// [`Ranker`] backed by [`score`].
///
/// # Examples
/// ```
/// use papss_core::{BuyerProfile, MemoryTownStore, Ranker, WeightVector};
/// use papss_scorer::CompositeScorer;
///
/// let ranked = CompositeScorer.rank(
///     &MemoryTownStore::demo(),
///     &BuyerProfile::default(),
///     &WeightVector::default(),
/// );
/// assert_eq!(ranked.len(), 7);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeScorer;

impl CompositeScorer {
    /// Rank a store and keep the full report.
    #[must_use]
    pub fn report(
        &self,
        store: &dyn TownStore,
        profile: &BuyerProfile,
        weights: &WeightVector,
    ) -> ScoreReport {
        score_with_report(store.towns(), profile, weights)
    }
}

impl Ranker for CompositeScorer {
    fn rank(
        &self,
        store: &dyn TownStore,
        profile: &BuyerProfile,
        weights: &WeightVector,
    ) -> Vec<ScoredTown> {
        score(store.towns(), profile, weights)
    }
}
