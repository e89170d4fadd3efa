//! Facade crate for the PapssImmo town recommendation engine.
//!
//! This crate re-exports the core domain types together with the composite
//! scoring engine, so embedding applications depend on a single crate.
//!
//! # Examples
//! ```
//! use papss::{BuyerProfile, CompositeScorer, MemoryTownStore, Ranker, WeightVector};
//!
//! let ranked = CompositeScorer.rank(
//!     &MemoryTownStore::demo(),
//!     &BuyerProfile::default(),
//!     &WeightVector::default(),
//! );
//! assert!(ranked.iter().all(|scored| scored.composite_score <= 10.0));
//! ```

#![forbid(unsafe_code)]

pub use papss_core::{
    Amenities, BuyerProfile, Criterion, CriterionParseError, HouseholdKind, MemoryTownStore,
    ProfileError, Ranker, Rating, RatingError, ScoredTown, Town, TownError, TownStore,
    TownStoreError, WeightError, WeightVector,
};

pub use papss_scorer::{
    CompositeScorer, Rejection, RejectionReason, ScoreReport, adjust_weights, score,
    score_with_report,
};

#[cfg(feature = "test-support")]
pub use papss_core::test_support;
