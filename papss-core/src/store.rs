//! Read-only access to candidate towns.
//!
//! The [`TownStore`] trait is the only seam between the scoring engine and
//! wherever towns come from. Stores expose enumeration and nothing else, so
//! a scoring request can never mutate the candidate set.

use std::collections::HashSet;

use thiserror::Error;

use crate::{Town, demo::demo_towns};

/// Read-only access to a fixed set of towns.
///
/// Implementations must yield towns in a stable order; the scoring engine
/// relies on it to break ties deterministically.
///
/// # Examples
///
/// ```rust
/// use papss_core::{MemoryTownStore, TownStore};
///
/// let store = MemoryTownStore::demo();
/// assert_eq!(store.towns().count(), 10);
/// ```
pub trait TownStore: Send + Sync {
    /// Iterate over every town in store order.
    fn towns(&self) -> Box<dyn Iterator<Item = &Town> + Send + '_>;
}

/// Errors returned when building a [`MemoryTownStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TownStoreError {
    /// Two towns shared a name.
    #[error("town '{name}' appears more than once")]
    DuplicateName {
        /// Repeated name.
        name: String,
    },
}

/// In-memory [`TownStore`] backed by a `Vec`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryTownStore {
    towns: Vec<Town>,
}

impl MemoryTownStore {
    /// Build a store, rejecting duplicate names.
    ///
    /// # Errors
    /// Returns [`TownStoreError::DuplicateName`] when a name repeats.
    pub fn new<I>(towns: I) -> Result<Self, TownStoreError>
    where
        I: IntoIterator<Item = Town>,
    {
        let collected: Vec<Town> = towns.into_iter().collect();
        let mut seen = HashSet::with_capacity(collected.len());
        if let Some(duplicate) = collected.iter().find(|town| !seen.insert(town.name.as_str())) {
            return Err(TownStoreError::DuplicateName {
                name: duplicate.name.clone(),
            });
        }
        Ok(Self { towns: collected })
    }

    /// The ten Île-de-France demo towns.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            towns: demo_towns(),
        }
    }

    /// Look a town up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Town> {
        self.towns.iter().find(|town| town.name == name)
    }

    /// Number of towns held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.towns.len()
    }

    /// Report whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.towns.is_empty()
    }
}

impl TownStore for MemoryTownStore {
    fn towns(&self) -> Box<dyn Iterator<Item = &Town> + Send + '_> {
        Box::new(self.towns.iter())
    }
}
