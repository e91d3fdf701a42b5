//! # Sort stage
//!
//! Deterministic ordering over a fixed set of [`SortKey`]s. Sorting is stable
//! (`slice::sort_by`), so records comparing equal on the active key keep
//! their relative input order, and `Relevance` applies no comparator at all.

use crate::model::PropertyRecord;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Catalog order, untouched.
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    AreaLarge,
    AreaSmall,
    Newest,
    Oldest,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::AreaLarge => "area-large",
            SortKey::AreaSmall => "area-small",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relevance" => Ok(SortKey::Relevance),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "area-large" => Ok(SortKey::AreaLarge),
            "area-small" => Ok(SortKey::AreaSmall),
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// Return the records ordered by `key`.
///
/// Takes the sequence by value and hands back a new ordering; callers keep
/// their own copies untouched.
pub fn sorted(mut records: Vec<PropertyRecord>, key: SortKey) -> Vec<PropertyRecord> {
    let cmp: fn(&PropertyRecord, &PropertyRecord) -> Ordering = match key {
        SortKey::Relevance => return records,
        SortKey::PriceLow => |a, b| a.price.cmp(&b.price),
        SortKey::PriceHigh => |a, b| b.price.cmp(&a.price),
        SortKey::AreaLarge => |a, b| b.area.total_cmp(&a.area),
        SortKey::AreaSmall => |a, b| a.area.total_cmp(&b.area),
        SortKey::Newest => |a, b| b.year_built.cmp(&a.year_built),
        SortKey::Oldest => |a, b| a.year_built.cmp(&b.year_built),
    };
    records.sort_by(cmp);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PropertyCatalog, StaticCatalog};
    use crate::model::PropertyId;

    fn seed() -> Vec<PropertyRecord> {
        StaticCatalog::seed().records().to_vec()
    }

    fn ids(records: &[PropertyRecord]) -> Vec<PropertyId> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn relevance_preserves_catalog_order() {
        let input = seed();
        let before = ids(&input);
        assert_eq!(ids(&sorted(input, SortKey::Relevance)), before);
    }

    #[test]
    fn price_ascending_and_descending() {
        let asc = sorted(seed(), SortKey::PriceLow);
        assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

        let desc = sorted(seed(), SortKey::PriceHigh);
        assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn area_ascending_and_descending() {
        let small = sorted(seed(), SortKey::AreaSmall);
        assert!(small.windows(2).all(|w| w[0].area <= w[1].area));

        let large = sorted(seed(), SortKey::AreaLarge);
        assert!(large.windows(2).all(|w| w[0].area >= w[1].area));
    }

    #[test]
    fn newest_and_oldest_by_year_built() {
        let newest = sorted(seed(), SortKey::Newest);
        assert!(newest.windows(2).all(|w| w[0].year_built >= w[1].year_built));

        let oldest = sorted(seed(), SortKey::Oldest);
        assert_eq!(oldest.first().unwrap().id, 8); // 2018
    }

    #[test]
    fn equal_keys_keep_input_order() {
        // Seed records 1 and 6 are both from 2020; 1 comes first in catalog
        // order, so Newest must list 1 before 6.
        let newest = sorted(seed(), SortKey::Newest);
        let pos_1 = newest.iter().position(|r| r.id == 1).unwrap();
        let pos_6 = newest.iter().position(|r| r.id == 6).unwrap();
        assert!(pos_1 < pos_6);

        // Same property, checked generically with a duplicated-key sequence.
        let mut dupes = seed();
        for r in &mut dupes {
            r.price = 1_000_000;
        }
        let order_before = ids(&dupes);
        assert_eq!(ids(&sorted(dupes, SortKey::PriceLow)), order_before);
    }

    #[test]
    fn sort_key_parses_from_str() {
        assert_eq!("price-low".parse::<SortKey>().unwrap(), SortKey::PriceLow);
        assert_eq!("RELEVANCE".parse::<SortKey>().unwrap(), SortKey::Relevance);
        assert!("cheapest".parse::<SortKey>().is_err());
        assert_eq!(SortKey::AreaLarge.to_string(), "area-large");
    }
}
