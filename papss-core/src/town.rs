//! Candidate towns and their fixed attributes.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Rating;

/// Amenity ratings of a town on the `0..=10` scale.
///
/// Every field reads "higher is better" except [`Amenities::noise`], where a
/// higher value means a noisier town.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Amenities {
    /// Public transport coverage.
    pub transport: Rating,
    /// School quality.
    pub schools: Rating,
    /// Perceived safety.
    pub safety: Rating,
    /// Green space and nature access.
    pub nature: Rating,
    /// Economic and cultural dynamism.
    pub dynamism: Rating,
    /// Ambient noise level; higher is worse.
    pub noise: Rating,
}

impl Amenities {
    /// Build amenities from raw ratings, saturating each at ten.
    ///
    /// Arguments follow the column order transport, schools, safety, nature,
    /// dynamism, noise.
    #[must_use]
    pub const fn from_raw(
        transport: u8,
        schools: u8,
        safety: u8,
        nature: u8,
        dynamism: u8,
        noise: u8,
    ) -> Self {
        Self {
            transport: Rating::saturating(transport),
            schools: Rating::saturating(schools),
            safety: Rating::saturating(safety),
            nature: Rating::saturating(nature),
            dynamism: Rating::saturating(dynamism),
            noise: Rating::saturating(noise),
        }
    }
}

/// A municipality a buyer might move to.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. They and
/// the photo reference are carried for display only and never scored.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use papss_core::{Amenities, Town};
///
/// # fn main() -> Result<(), papss_core::TownError> {
/// let town = Town::new(
///     "Clichy",
///     6800.0,
///     Amenities::from_raw(9, 7, 6, 5, 8, 5),
///     20,
///     Coord { x: 2.31, y: 48.90 },
///     "",
/// )?;
/// assert_eq!(town.total_price(80.0), 544_000.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTown"))]
pub struct Town {
    /// Display name; unique within a store.
    pub name: String,
    /// Price per square metre.
    pub price_per_area: f64,
    /// Amenity ratings.
    pub amenities: Amenities,
    /// Travel time to the reference city centre.
    pub commute_minutes: u16,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Opaque image reference.
    pub photo_ref: String,
}

/// Unvalidated wire form of a [`Town`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawTown {
    /// Display name.
    pub name: String,
    /// Price per square metre.
    pub price_per_area: f64,
    /// Amenity ratings.
    pub amenities: Amenities,
    /// Travel time to the reference city centre.
    pub commute_minutes: u16,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Opaque image reference.
    #[cfg_attr(feature = "serde", serde(default))]
    pub photo_ref: String,
}

/// Errors returned by [`Town::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TownError {
    /// The name was empty or whitespace.
    #[error("town name must not be empty")]
    EmptyName,
    /// The price per area was zero, negative or not finite.
    #[error("price per area for {name} must be positive and finite, got {price}")]
    InvalidPrice {
        /// Town being built.
        name: String,
        /// Rejected price.
        price: f64,
    },
    /// The commute time was zero.
    #[error("commute time for {name} must be positive")]
    ZeroCommute {
        /// Town being built.
        name: String,
    },
}

impl Town {
    /// Validates and constructs a [`Town`].
    ///
    /// # Errors
    /// Returns [`TownError`] for an empty name, a non-positive or non-finite
    /// price, or a zero commute time.
    pub fn new(
        name: impl Into<String>,
        price_per_area: f64,
        amenities: Amenities,
        commute_minutes: u16,
        location: Coord<f64>,
        photo_ref: impl Into<String>,
    ) -> Result<Self, TownError> {
        let town_name: String = name.into();
        if town_name.trim().is_empty() {
            return Err(TownError::EmptyName);
        }
        if !price_per_area.is_finite() || price_per_area <= 0.0 {
            return Err(TownError::InvalidPrice {
                name: town_name,
                price: price_per_area,
            });
        }
        if commute_minutes == 0 {
            return Err(TownError::ZeroCommute { name: town_name });
        }
        Ok(Self {
            name: town_name,
            price_per_area,
            amenities,
            commute_minutes,
            location,
            photo_ref: photo_ref.into(),
        })
    }

    /// Total purchase price for a home of `surface_area` square metres.
    #[expect(
        clippy::float_arithmetic,
        reason = "the purchase price scales linearly with surface"
    )]
    #[must_use]
    pub fn total_price(&self, surface_area: f64) -> f64 {
        self.price_per_area * surface_area
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}

impl TryFrom<RawTown> for Town {
    type Error = TownError;

    fn try_from(raw: RawTown) -> Result<Self, Self::Error> {
        Self::new(
            raw.name,
            raw.price_per_area,
            raw.amenities,
            raw.commute_minutes,
            raw.location,
            raw.photo_ref,
        )
    }
}
