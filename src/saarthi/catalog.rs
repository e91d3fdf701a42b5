//! # Property Catalog
//!
//! Read-only source of [`PropertyRecord`]s. The catalog is abstracted behind
//! the [`PropertyCatalog`] trait so the filter/sort/search layers never care
//! where records come from:
//!
//! - [`StaticCatalog`]: the bundled seed listing data (this build)
//! - A fetched or paginated source can be slotted in later without touching
//!   the search contracts.
//!
//! Catalog order is meaningful: it is the "relevance" order that the sort
//! stage preserves when no comparator is active.

use crate::error::Result;
use crate::model::{PropertyId, PropertyRecord};
use once_cell::sync::Lazy;

const SEED_JSON: &str = include_str!("data/properties.json");

static SEED: Lazy<Vec<PropertyRecord>> =
    Lazy::new(|| serde_json::from_str(SEED_JSON).expect("bundled catalog data is valid JSON"));

/// Canonical city list offered by the search UI.
pub const CITIES: &[&str] = &[
    "Mumbai",
    "Delhi",
    "Gurgaon",
    "Bangalore",
    "Pune",
    "Hyderabad",
    "Chennai",
    "Kolkata",
    "Noida",
    "Ahmedabad",
    "Bhopal",
    "Shimla",
    "Goa",
];

/// Canonical amenity list offered by the search UI.
pub const AMENITIES: &[&str] = &[
    "Swimming Pool",
    "Gym",
    "Parking",
    "Garden",
    "Security Guard",
    "Lift",
    "Power Backup",
    "Club House",
    "Children Play Area",
    "CCTV",
    "Intercom",
    "Maintenance Staff",
];

/// Abstract interface for a read-only, ordered property source.
pub trait PropertyCatalog {
    /// All records, in catalog (relevance) order.
    fn records(&self) -> &[PropertyRecord];

    /// Look up a single record by id.
    fn get(&self, id: PropertyId) -> Option<&PropertyRecord> {
        self.records().iter().find(|r| r.id == id)
    }

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

/// Fixed in-memory catalog.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    records: Vec<PropertyRecord>,
}

impl StaticCatalog {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self { records }
    }

    /// The bundled seed listings.
    pub fn seed() -> Self {
        Self {
            records: SEED.clone(),
        }
    }

    /// Parse a catalog from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<PropertyRecord> = serde_json::from_str(json)?;
        Ok(Self { records })
    }
}

impl PropertyCatalog for StaticCatalog {
    fn records(&self) -> &[PropertyRecord] {
        &self.records
    }
}
