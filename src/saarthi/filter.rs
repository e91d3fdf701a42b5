//! # Filter predicates
//!
//! [`FilterState`] is an immutable value type holding one optional predicate
//! per recognized search field. An unset field never excludes a record (it is
//! the identity element of the filter); active fields compose with logical
//! AND. The one deliberate exception to AND composition is the amenity list,
//! which matches if the record has ANY of the requested amenities. That is
//! the documented behavior of the original search surface and is preserved
//! exactly.
//!
//! Numeric fields are explicit `Option`s rather than magic empty strings:
//! `None` filters nothing, while `Some(0)` is a real (trivially satisfiable)
//! minimum. Raw user input goes through [`parse_bound`] / [`parse_count`],
//! which degrade unparseable text to "no constraint" instead of erroring.

use crate::model::{Furnishing, Possession, PropertyRecord, PropertyType};

/// Search/filter configuration for one query.
///
/// Updates go through the `with_*` builders so every recognized option stays
/// enumerable and type-checked; there is no dynamic field merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Case-insensitive substring match on title, location, or description.
    pub search_query: Option<String>,
    /// Case-insensitive exact city match.
    pub location: Option<String>,
    pub property_type: Option<PropertyType>,
    /// Minimum bedroom count (the "2+ BHK" filter), inclusive.
    pub min_bedrooms: Option<u32>,
    /// Inclusive price bounds, whole currency units.
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Inclusive area bounds, square feet.
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,
    pub possession: Option<Possession>,
    pub furnishing: Option<Furnishing>,
    /// ANY-match amenity names; empty means no amenity constraint.
    pub amenities: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.search_query = if query.trim().is_empty() {
            None
        } else {
            Some(query)
        };
        self
    }

    pub fn with_location(mut self, city: impl Into<String>) -> Self {
        let city = city.into();
        self.location = if city.trim().is_empty() {
            None
        } else {
            Some(city)
        };
        self
    }

    pub fn with_property_type(mut self, property_type: Option<PropertyType>) -> Self {
        self.property_type = property_type;
        self
    }

    pub fn with_min_bedrooms(mut self, min: Option<u32>) -> Self {
        self.min_bedrooms = min;
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_area_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.area_min = min;
        self.area_max = max;
        self
    }

    pub fn with_possession(mut self, possession: Option<Possession>) -> Self {
        self.possession = possession;
        self
    }

    pub fn with_furnishing(mut self, furnishing: Option<Furnishing>) -> Self {
        self.furnishing = furnishing;
        self
    }

    /// Add the amenity if absent, remove it if present (checkbox semantics).
    pub fn with_amenity_toggled(mut self, amenity: impl Into<String>) -> Self {
        let amenity = amenity.into();
        if let Some(pos) = self.amenities.iter().position(|a| *a == amenity) {
            self.amenities.remove(pos);
        } else {
            self.amenities.push(amenity);
        }
        self
    }

    pub fn with_amenities(mut self, amenities: Vec<String>) -> Self {
        self.amenities = amenities;
        self
    }

    /// Reset every field ("Clear All").
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Does the record pass every active predicate?
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        self.matches_query(record)
            && self.matches_location(record)
            && self.matches_property_type(record)
            && self.matches_bedrooms(record)
            && self.matches_price(record)
            && self.matches_area(record)
            && self.matches_possession(record)
            && self.matches_furnishing(record)
            && self.matches_amenities(record)
    }

    fn matches_query(&self, record: &PropertyRecord) -> bool {
        match &self.search_query {
            None => true,
            Some(query) => {
                let needle = query.to_lowercase();
                record.title.to_lowercase().contains(&needle)
                    || record.location.to_lowercase().contains(&needle)
                    || record.description.to_lowercase().contains(&needle)
            }
        }
    }

    fn matches_location(&self, record: &PropertyRecord) -> bool {
        match &self.location {
            None => true,
            Some(city) => record.location.eq_ignore_ascii_case(city),
        }
    }

    fn matches_property_type(&self, record: &PropertyRecord) -> bool {
        match self.property_type {
            None => true,
            Some(t) => record.property_type == t,
        }
    }

    fn matches_bedrooms(&self, record: &PropertyRecord) -> bool {
        match self.min_bedrooms {
            None => true,
            Some(min) => record.bedrooms >= min,
        }
    }

    fn matches_price(&self, record: &PropertyRecord) -> bool {
        in_range(record.price as f64, self.min_price, self.max_price)
    }

    fn matches_area(&self, record: &PropertyRecord) -> bool {
        in_range(record.area, self.area_min, self.area_max)
    }

    fn matches_possession(&self, record: &PropertyRecord) -> bool {
        match self.possession {
            None => true,
            Some(p) => record.possession == p,
        }
    }

    fn matches_furnishing(&self, record: &PropertyRecord) -> bool {
        match self.furnishing {
            None => true,
            Some(f) => record.furnishing == f,
        }
    }

    fn matches_amenities(&self, record: &PropertyRecord) -> bool {
        if self.amenities.is_empty() {
            return true;
        }
        // ANY-match: one shared amenity is enough.
        self.amenities.iter().any(|a| record.has_amenity(a))
    }
}

/// Inclusive range check; a missing bound is unbounded on that side.
fn in_range(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    if let Some(min) = min {
        if value < min {
            return false;
        }
    }
    if let Some(max) = max {
        if value > max {
            return false;
        }
    }
    true
}

/// Parse a numeric bound from raw user input.
///
/// Empty, whitespace-only, or unparseable text means "no constraint"; the
/// filter must never error on malformed input. Negative bounds are clamped
/// out the same way since neither price nor area can be negative.
pub fn parse_bound(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => None,
    }
}

/// Parse a count threshold (e.g. minimum bedrooms) from raw user input.
pub fn parse_count(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PropertyCatalog, StaticCatalog};

    fn record(id: u32) -> PropertyRecord {
        StaticCatalog::seed().get(id).unwrap().clone()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = FilterState::new();
        let catalog = StaticCatalog::seed();
        for r in catalog.records() {
            assert!(filter.matches(r), "empty filter excluded {}", r.id);
        }
    }

    #[test]
    fn search_query_is_case_insensitive_substring() {
        let filter = FilterState::new().with_search_query("SEA view");
        assert!(filter.matches(&record(1)));
        assert!(!filter.matches(&record(2)));

        // Description text counts too.
        let filter = FilterState::new().with_search_query("electronic city");
        assert!(filter.matches(&record(3)));
    }

    #[test]
    fn blank_search_query_is_not_a_constraint() {
        let filter = FilterState::new().with_search_query("   ");
        assert!(filter.is_unconstrained());
    }

    #[test]
    fn location_is_exact_case_insensitive() {
        let filter = FilterState::new().with_location("mumbai");
        assert!(filter.matches(&record(1)));
        assert!(!filter.matches(&record(4)));
    }

    #[test]
    fn bedrooms_is_a_minimum_not_exact() {
        let filter = FilterState::new().with_min_bedrooms(Some(3));
        assert!(filter.matches(&record(1))); // 3 beds
        assert!(filter.matches(&record(2))); // 4 beds
        assert!(!filter.matches(&record(4))); // 2 beds
    }

    #[test]
    fn zero_minimum_is_distinct_from_unset_but_matches_all() {
        let filter = FilterState::new().with_min_bedrooms(Some(0));
        assert!(!filter.is_unconstrained());
        let catalog = StaticCatalog::seed();
        assert!(catalog.records().iter().all(|r| filter.matches(r)));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let r = record(4); // price 12_000_000
        let exact = FilterState::new().with_price_range(Some(12_000_000.0), Some(12_000_000.0));
        assert!(exact.matches(&r));

        let below = FilterState::new().with_price_range(None, Some(11_999_999.0));
        assert!(!below.matches(&r));

        let above = FilterState::new().with_price_range(Some(12_000_001.0), None);
        assert!(!above.matches(&r));
    }

    #[test]
    fn half_open_ranges_work() {
        let filter = FilterState::new().with_price_range(Some(20_000_000.0), None);
        assert!(filter.matches(&record(1))); // 25M
        assert!(!filter.matches(&record(8))); // 8M
    }

    #[test]
    fn area_bounds_are_inclusive_and_independent_of_price() {
        let filter = FilterState::new().with_area_range(Some(980.0), Some(1200.0));
        assert!(filter.matches(&record(1))); // 1200
        assert!(filter.matches(&record(4))); // 980
        assert!(!filter.matches(&record(2))); // 2500
    }

    #[test]
    fn possession_and_furnishing_are_exact() {
        let filter = FilterState::new().with_possession(Some(Possession::NewLaunch));
        assert!(filter.matches(&record(7)));
        assert!(!filter.matches(&record(1)));

        let filter = FilterState::new().with_furnishing(Some(Furnishing::Unfurnished));
        assert!(filter.matches(&record(3)));
        assert!(!filter.matches(&record(1)));
    }

    #[test]
    fn amenities_match_any_not_all() {
        // Record 4 has Garden but no Swimming Pool.
        let filter = FilterState::new()
            .with_amenity_toggled("Swimming Pool")
            .with_amenity_toggled("Garden");
        assert!(filter.matches(&record(4)));

        // Record 7 has neither.
        assert!(!filter.matches(&record(7)));
    }

    #[test]
    fn amenity_toggle_is_a_checkbox() {
        let filter = FilterState::new()
            .with_amenity_toggled("Gym")
            .with_amenity_toggled("Lift")
            .with_amenity_toggled("Gym");
        assert_eq!(filter.amenities, vec!["Lift".to_string()]);
    }

    #[test]
    fn predicates_compose_with_and() {
        let filter = FilterState::new()
            .with_location("Mumbai")
            .with_min_bedrooms(Some(4));
        // Mumbai record has only 3 bedrooms.
        let catalog = StaticCatalog::seed();
        assert!(!catalog.records().iter().any(|r| filter.matches(r)));
    }

    #[test]
    fn cleared_resets_everything() {
        let filter = FilterState::new()
            .with_location("Pune")
            .with_amenity_toggled("Gym");
        assert!(!filter.is_unconstrained());
        assert!(FilterState::cleared().is_unconstrained());
    }

    #[test]
    fn parse_bound_degrades_to_unconstrained() {
        assert_eq!(parse_bound("1500000"), Some(1_500_000.0));
        assert_eq!(parse_bound(" 980.5 "), Some(980.5));
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("   "), None);
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound("-5"), None);
        assert_eq!(parse_bound("NaN"), None);
    }

    #[test]
    fn parse_count_degrades_to_unconstrained() {
        assert_eq!(parse_count("3"), Some(3));
        assert_eq!(parse_count("0"), Some(0));
        assert_eq!(parse_count("two"), None);
        assert_eq!(parse_count(""), None);
    }
}
