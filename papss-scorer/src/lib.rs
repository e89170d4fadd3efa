//! Scoring engine for PapssImmo town recommendations.
//!
//! The crate turns a [`BuyerProfile`](papss_core::BuyerProfile) and a
//! [`WeightVector`](papss_core::WeightVector) into a ranked list of towns:
//! - **Household adjustment** copies the caller's weights and adds fixed
//!   increments driven by the children's and couple's ages
//!   ([`adjust_weights`]).
//! - **Filtering** drops towns whose purchase price for the requested surface
//!   exceeds the budget, or whose commute exceeds the ceiling.
//! - **Derivation** min–max normalises price per area across the survivors
//!   into an affordability score, inverts the noise rating into a quiet
//!   score, and computes the weighted composite on `0.0..=10.0`.
//! - **Ordering** sorts survivors by descending composite with a stable sort.
//!
//! Every stage returns a fresh `Vec`; nothing is cached between calls, so
//! [`score`] is pure and may run concurrently on different threads.
//!
//! # Examples
//!
//! ```
//! use papss_core::{BuyerProfile, MemoryTownStore, TownStore, WeightVector};
//! use papss_scorer::score;
//!
//! let store = MemoryTownStore::demo();
//! let profile = BuyerProfile::new(600_000.0, 80.0, 45, 32, 5)?;
//! let ranked = score(store.towns(), &profile, &WeightVector::default());
//!
//! assert_eq!(ranked.len(), 7);
//! assert_eq!(ranked[0].town.name, "Nogent-sur-Marne");
//! # Ok::<(), papss_core::ProfileError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod adjust;
mod engine;
pub mod filter;
pub mod normalise;

pub use adjust::{
    SENIOR_COUPLE_AGE, TEEN_CHILDREN_AGE, YOUNG_CHILDREN_AGE, adjust_for_profile, adjust_weights,
};
pub use engine::{CompositeScorer, ScoreReport, score, score_with_report};
pub use filter::{Rejection, RejectionReason};

#[cfg(test)]
mod tests;
