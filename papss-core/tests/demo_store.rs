//! Checks on the shipped demo dataset that downstream scenarios rely on.

use papss_core::{MemoryTownStore, TownStore};
use rstest::{fixture, rstest};

#[fixture]
fn store() -> MemoryTownStore {
    MemoryTownStore::demo()
}

#[rstest]
fn demo_holds_ten_uniquely_named_towns(store: MemoryTownStore) {
    let names: Vec<String> = store.towns().map(|town| town.name.clone()).collect();
    assert_eq!(names.len(), 10);
    let rebuilt = MemoryTownStore::new(store.towns().cloned());
    assert!(rebuilt.is_ok(), "demo names must be unique");
}

#[rstest]
#[case("Boulogne-Billancourt", 8900.0)]
#[case("Levallois-Perret", 9600.0)]
#[case("Noisy-le-Grand", 4000.0)]
fn demo_prices_match_reference(
    store: MemoryTownStore,
    #[case] name: &str,
    #[case] expected: f64,
) {
    let town = store.get(name).expect("town present in demo");
    assert_eq!(town.price_per_area, expected);
}

#[rstest]
fn demo_order_starts_with_asnieres(store: MemoryTownStore) {
    let first = store.towns().next().map(|town| town.name.as_str());
    assert_eq!(first, Some("Asnières-sur-Seine"));
}
