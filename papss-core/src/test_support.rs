//! Test-only town builders shared by unit, behaviour and property tests.

use geo::Coord;

use crate::{Amenities, Town};

/// Build a town with mid-scale amenities.
///
/// Ratings are all five, so only price and commute vary between fixtures.
#[must_use]
pub fn town(name: &str, price_per_area: f64, commute_minutes: u16) -> Town {
    town_with(
        name,
        price_per_area,
        commute_minutes,
        Amenities::from_raw(5, 5, 5, 5, 5, 5),
    )
}

/// Build a town with explicit amenities.
#[must_use]
pub fn town_with(
    name: &str,
    price_per_area: f64,
    commute_minutes: u16,
    amenities: Amenities,
) -> Town {
    Town {
        name: name.to_owned(),
        price_per_area,
        amenities,
        commute_minutes,
        location: Coord { x: 2.35, y: 48.86 },
        photo_ref: String::new(),
    }
}
