//! Unit coverage for the scoring pipeline.
#![forbid(unsafe_code)]

use papss_core::test_support::{town, town_with};
use papss_core::{Amenities, BuyerProfile, MemoryTownStore, Ranker, TownStore, WeightVector};
use rstest::{fixture, rstest};

use crate::{CompositeScorer, RejectionReason, score, score_with_report};

/// Ages that trigger no household rule.
const NEUTRAL_COUPLE: u8 = 40;
const NEUTRAL_CHILDREN: u8 = 16;

#[fixture]
fn demo() -> MemoryTownStore {
    MemoryTownStore::demo()
}

fn neutral_profile(budget: f64, surface: f64, max_commute: u16) -> BuyerProfile {
    BuyerProfile::new(budget, surface, max_commute, NEUTRAL_COUPLE, NEUTRAL_CHILDREN)
        .expect("valid profile")
}

fn names(ranked: &[papss_core::ScoredTown]) -> Vec<&str> {
    ranked.iter().map(|s| s.town.name.as_str()).collect()
}

#[rstest]
fn default_request_ranks_seven_demo_towns(demo: MemoryTownStore) {
    let ranked = score(demo.towns(), &BuyerProfile::default(), &WeightVector::default());
    assert_eq!(
        names(&ranked),
        [
            "Nogent-sur-Marne",
            "Maisons-Alfort",
            "Saint-Germain-en-Laye",
            "Noisy-le-Grand",
            "Asnières-sur-Seine",
            "Suresnes",
            "Clichy",
        ]
    );
    assert_eq!(ranked.first().map(|s| s.composite_score), Some(7.51));
}

#[rstest]
fn report_lists_over_budget_towns(demo: MemoryTownStore) {
    let report = score_with_report(demo.towns(), &BuyerProfile::default(), &WeightVector::default());
    let rejected: Vec<_> = report.rejected.iter().map(|r| r.town.as_str()).collect();
    assert_eq!(
        rejected,
        ["Boulogne-Billancourt", "Levallois-Perret", "Versailles"]
    );
    assert!(report.rejected.iter().all(|r| {
        r.reasons
            .iter()
            .all(|reason| matches!(reason, RejectionReason::OverBudget { .. }))
    }));
}

#[rstest]
fn report_exposes_adjusted_weights(demo: MemoryTownStore) {
    let report = score_with_report(demo.towns(), &BuyerProfile::default(), &WeightVector::zero());
    assert!(report.applied_weights.sum() > 0.0);
}

#[rstest]
fn equal_scores_keep_store_order(demo: MemoryTownStore) {
    let profile = neutral_profile(900_000.0, 80.0, 45);
    let ranked = score(demo.towns(), &profile, &WeightVector::uniform(0.2));
    let position = |name: &str| names(&ranked).iter().position(|n| *n == name);

    // Both pairs tie after rounding to two decimals.
    assert!(position("Boulogne-Billancourt") < position("Saint-Germain-en-Laye"));
    assert!(position("Noisy-le-Grand") < position("Levallois-Perret"));
}

#[rstest]
fn single_survivor_gets_midpoint_price_score() {
    let towns = [town("Only", 5000.0, 20), town("Dear", 50_000.0, 20)];
    let profile = neutral_profile(500_000.0, 80.0, 45);
    let ranked = score(&towns, &profile, &WeightVector::default());
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked.first().map(|s| s.price_score), Some(5.0));
}

#[rstest]
fn zero_weights_fall_back_to_raw_sum() {
    // Ratings of zero and maximal noise leave only the flat price score.
    let quiet_nothing = Amenities::from_raw(0, 0, 0, 0, 0, 10);
    let towns = [
        town_with("A", 3000.0, 20, quiet_nothing),
        town_with("B", 3000.0, 25, Amenities::from_raw(1, 0, 0, 0, 1, 10)),
    ];
    let profile = neutral_profile(500_000.0, 80.0, 45);
    let ranked = score(&towns, &profile, &WeightVector::zero());
    let scores: Vec<_> = ranked.iter().map(|s| (s.town.name.as_str(), s.composite_score)).collect();
    assert_eq!(scores, [("B", 7.0), ("A", 5.0)]);
}

#[rstest]
fn zero_weights_clamp_large_raw_sums() {
    // Five ratings of five, a flat price score and a quiet score of five sum to 35.
    let towns = [town("Busy", 3000.0, 20), town("Also busy", 3000.0, 30)];
    let profile = neutral_profile(500_000.0, 80.0, 45);
    let ranked = score(&towns, &profile, &WeightVector::zero());
    let scores: Vec<_> = ranked.iter().map(|s| (s.town.name.as_str(), s.composite_score)).collect();
    assert_eq!(scores, [("Busy", 10.0), ("Also busy", 10.0)]);
}

#[rstest]
fn weighting_a_single_criterion_ranks_by_it_alone() {
    let towns = [
        town_with("Loud", 3000.0, 20, Amenities::from_raw(5, 5, 5, 5, 5, 9)),
        town_with("Calm", 3000.0, 20, Amenities::from_raw(5, 5, 5, 5, 5, 1)),
    ];
    let weights = WeightVector::zero().with_weight(papss_core::Criterion::NoiseSensitivity, 1.0);
    let ranked = score(&towns, &neutral_profile(500_000.0, 80.0, 45), &weights);
    assert_eq!(names(&ranked), ["Calm", "Loud"]);
    assert_eq!(ranked.first().map(|s| s.composite_score), Some(9.0));
    assert_eq!(ranked.get(1).map(|s| s.quiet_score), Some(1.0));
}

#[rstest]
fn ranker_matches_free_function(demo: MemoryTownStore) {
    let profile = BuyerProfile::default();
    let weights = WeightVector::default();
    assert_eq!(
        CompositeScorer.rank(&demo, &profile, &weights),
        score(demo.towns(), &profile, &weights)
    );
}

#[rstest]
fn scoring_does_not_touch_inputs(demo: MemoryTownStore) {
    let before = demo.clone();
    let weights = WeightVector::default();
    let _first = score(demo.towns(), &BuyerProfile::default(), &weights);
    assert_eq!(demo, before);
    assert_eq!(weights, WeightVector::default());
}
