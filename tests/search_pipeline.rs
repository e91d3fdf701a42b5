//! End-to-end checks of the search and favorites flows through the API
//! facade, against the seed catalog and the in-memory favorites backend.

use saarthi::api::SaarthiApi;
use saarthi::catalog::StaticCatalog;
use saarthi::favorites::memory::MemoryBackend;
use saarthi::favorites::FavoritesStore;
use saarthi::filter::FilterState;
use saarthi::model::PropertyId;
use saarthi::sort::SortKey;

fn api_with_backend(backend: MemoryBackend) -> SaarthiApi<StaticCatalog, MemoryBackend> {
    SaarthiApi::new(StaticCatalog::seed(), FavoritesStore::open(backend))
}

fn api() -> SaarthiApi<StaticCatalog, MemoryBackend> {
    api_with_backend(MemoryBackend::new())
}

#[test]
fn city_filter_returns_the_single_mumbai_listing_in_catalog_order() {
    let api = api();
    let filters = FilterState::new().with_location("Mumbai");
    let result = api.search(&filters, SortKey::Relevance).unwrap();

    assert_eq!(result.listed_properties.len(), 1);
    assert_eq!(result.listed_properties[0].id, 1);
    assert_eq!(result.listed_properties[0].title, "Sea View Luxury Apartment");
}

#[test]
fn price_band_ten_to_twenty_million_sorted_ascending() {
    let api = api();
    let filters = FilterState::new().with_price_range(Some(10_000_000.0), Some(20_000_000.0));
    let result = api.search(&filters, SortKey::PriceLow).unwrap();

    let prices: Vec<u64> = result.listed_properties.iter().map(|r| r.price).collect();
    assert_eq!(prices, vec![12_000_000, 15_000_000, 18_000_000]);
    assert!(prices
        .iter()
        .all(|p| (10_000_000..=20_000_000).contains(p)));
}

#[test]
fn combined_filters_and_amenity_any_match() {
    let api = api();
    // Ready-to-move apartments with a pool or a garden: records 1, 4, 5, 8.
    let filters = FilterState::new()
        .with_property_type(Some("apartment".parse().unwrap()))
        .with_possession(Some("ready".parse().unwrap()))
        .with_amenity_toggled("Swimming Pool")
        .with_amenity_toggled("Garden");
    let result = api.search(&filters, SortKey::Relevance).unwrap();

    let ids: Vec<PropertyId> = result.listed_properties.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 4, 5, 8]);
}

#[test]
fn toggle_on_empty_store_then_back_off() {
    let mut api = api();

    let result = api.toggle_favorite(3).unwrap();
    assert_eq!(result.favorite_state, Some(true));
    assert_eq!(api.favorites_count(), 1);

    let result = api.toggle_favorite(3).unwrap();
    assert_eq!(result.favorite_state, Some(false));
    assert_eq!(api.favorites_count(), 0);
}

#[test]
fn favorites_survive_a_reopen_of_the_same_backend() {
    let backend = MemoryBackend::new();

    let mut api = api_with_backend(backend.clone());
    api.add_favorite(5).unwrap();
    api.add_favorite(9).unwrap();
    api.remove_favorite(5).unwrap();
    drop(api);

    let api = api_with_backend(backend);
    assert!(api.is_favorite(9));
    assert!(!api.is_favorite(5));
    assert_eq!(api.favorites_count(), 1);
}

#[test]
fn favorites_listing_resolves_against_the_catalog() {
    let mut api = api();
    api.toggle_favorite(7).unwrap();
    api.toggle_favorite(2).unwrap();

    let result = api.favorites(SortKey::Relevance).unwrap();
    let titles: Vec<&str> = result
        .listed_properties
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Smart Home in Noida", "Modern Villa in DLF City"]);
}

#[test]
fn corrupt_favorites_storage_degrades_to_empty_not_an_error() {
    let api = api_with_backend(MemoryBackend::corrupt());
    assert_eq!(api.favorites_count(), 0);
    assert!(api.favorites_load_warning().is_some());

    // Search is unaffected.
    let result = api.search(&FilterState::new(), SortKey::Relevance).unwrap();
    assert_eq!(result.listed_properties.len(), 8);
}
