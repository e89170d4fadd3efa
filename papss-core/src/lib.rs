//! Core domain types for the PapssImmo town recommendation engine.
//!
//! These models validate at construction so the scoring engine can treat
//! every value as trusted: towns carry bounded [`Rating`]s, buyer profiles
//! reject non-positive budgets and surfaces, and weight vectors always hold
//! all seven [`Criterion`] values.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod criterion;
mod demo;
pub mod profile;
pub mod ranking;
pub mod rating;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod town;
pub mod weights;

pub use criterion::{Criterion, CriterionParseError};
pub use profile::{BuyerProfile, HouseholdKind, ProfileError, RawBuyerProfile, YOUNG_COUPLE_AGE};
pub use ranking::{Ranker, SCORE_MAX, ScoredTown};
pub use rating::{RATING_MAX, Rating, RatingError};
pub use store::{MemoryTownStore, TownStore, TownStoreError};
pub use town::{Amenities, RawTown, Town, TownError};
pub use weights::{WeightError, WeightVector};
