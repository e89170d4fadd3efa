//! Fixed demonstration dataset of ten Île-de-France towns.

use geo::Coord;

use crate::{Amenities, Town};

struct DemoRow {
    name: &'static str,
    price_per_area: f64,
    // transport, schools, safety, nature, dynamism, noise
    ratings: [u8; 6],
    commute_minutes: u16,
    latitude: f64,
    longitude: f64,
    photo_ref: &'static str,
}

const DEMO_ROWS: [DemoRow; 10] = [
    DemoRow {
        name: "Asnières-sur-Seine",
        price_per_area: 6400.0,
        ratings: [9, 8, 7, 6, 8, 6],
        commute_minutes: 20,
        latitude: 48.91,
        longitude: 2.28,
        photo_ref: "https://upload.wikimedia.org/wikipedia/commons/5/5b/Mairie_d%27Asni%C3%A8res-sur-Seine_02.jpg",
    },
    DemoRow {
        name: "Boulogne-Billancourt",
        price_per_area: 8900.0,
        ratings: [10, 9, 8, 7, 9, 5],
        commute_minutes: 15,
        latitude: 48.84,
        longitude: 2.24,
        photo_ref: "https://upload.wikimedia.org/wikipedia/commons/4/44/Boulogne-Billancourt_-_H%C3%B4tel_de_ville_1.jpg",
    },
    DemoRow {
        name: "Nogent-sur-Marne",
        price_per_area: 5800.0,
        ratings: [8, 9, 8, 8, 7, 6],
        commute_minutes: 30,
        latitude: 48.83,
        longitude: 2.47,
        photo_ref: "https://upload.wikimedia.org/wikipedia/commons/0/09/Mairie_de_Nogent-sur-Marne.jpg",
    },
    DemoRow {
        name: "Noisy-le-Grand",
        price_per_area: 4000.0,
        ratings: [7, 7, 6, 7, 8, 7],
        commute_minutes: 35,
        latitude: 48.84,
        longitude: 2.55,
        photo_ref: "https://upload.wikimedia.org/wikipedia/commons/7/70/Mairie_de_Noisy-le-Grand.jpg",
    },
    DemoRow {
        name: "Clichy",
        price_per_area: 6800.0,
        ratings: [9, 7, 6, 5, 8, 5],
        commute_minutes: 20,
        latitude: 48.90,
        longitude: 2.31,
        photo_ref: "https://upload.wikimedia.org/wikipedia/commons/e/e7/Mairie_de_Clichy_%28Hauts-de-Seine%29.jpg",
    },
    DemoRow {
        name: "Saint-Germain-en-Laye",
        price_per_area: 7200.0,
        ratings: [8, 9, 9, 9, 8, 8],
        commute_minutes: 40,
        latitude: 48.90,
        longitude: 2.09,
        photo_ref: "https://upload.wikimedia.org/wikipedia/commons/a/a8/Saint-Germain-en-Laye_mairie.jpg",
    },
    DemoRow {
        name: "Levallois-Perret",
        price_per_area: 9600.0,
        ratings: [10, 9, 7, 8, 9, 5],
        commute_minutes: 15,
        latitude: 48.90,
        longitude: 2.28,
        photo_ref: "https://upload.wikimedia.org/wikipedia/commons/0/00/H%C3%B4tel_de_ville_de_Levallois-Perret_03.jpg",
    },
    DemoRow {
        name: "Suresnes",
        price_per_area: 7300.0,
        ratings: [9, 8, 8, 8, 8, 6],
        commute_minutes: 25,
        latitude: 48.87,
        longitude: 2.22,
        photo_ref: "https://upload.wikimedia.org/wikipedia/commons/f/f8/Mairie_de_Suresnes_2.jpg",
    },
    DemoRow {
        name: "Maisons-Alfort",
        price_per_area: 5600.0,
        ratings: [8, 8, 8, 8, 7, 6],
        commute_minutes: 30,
        latitude: 48.80,
        longitude: 2.44,
        photo_ref: "https://upload.wikimedia.org/wikipedia/commons/f/f9/Mairie_de_Maisons-Alfort_2019.jpg",
    },
    DemoRow {
        name: "Versailles",
        price_per_area: 8200.0,
        ratings: [7, 9, 10, 9, 7, 7],
        commute_minutes: 45,
        latitude: 48.80,
        longitude: 2.13,
        photo_ref: "https://upload.wikimedia.org/wikipedia/commons/7/7e/H%C3%B4tel_de_Ville_de_Versailles.jpg",
    },
];

impl DemoRow {
    fn to_town(&self) -> Town {
        let [transport, schools, safety, nature, dynamism, noise] = self.ratings;
        Town {
            name: self.name.to_owned(),
            price_per_area: self.price_per_area,
            amenities: Amenities::from_raw(transport, schools, safety, nature, dynamism, noise),
            commute_minutes: self.commute_minutes,
            location: Coord {
                x: self.longitude,
                y: self.latitude,
            },
            photo_ref: self.photo_ref.to_owned(),
        }
    }
}

/// Build the demo towns in their canonical order.
pub(crate) fn demo_towns() -> Vec<Town> {
    DEMO_ROWS.iter().map(DemoRow::to_town).collect()
}
