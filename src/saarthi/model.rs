use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable catalog-assigned identifier for a property.
pub type PropertyId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Apartment,
    Villa,
    House,
    Plot,
    Commercial,
    Studio,
    Farmhouse,
    Penthouse,
    Bungalow,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::House => "house",
            PropertyType::Plot => "plot",
            PropertyType::Commercial => "commercial",
            PropertyType::Studio => "studio",
            PropertyType::Farmhouse => "farmhouse",
            PropertyType::Penthouse => "penthouse",
            PropertyType::Bungalow => "bungalow",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apartment" => Ok(PropertyType::Apartment),
            "villa" => Ok(PropertyType::Villa),
            "house" => Ok(PropertyType::House),
            "plot" => Ok(PropertyType::Plot),
            "commercial" => Ok(PropertyType::Commercial),
            "studio" => Ok(PropertyType::Studio),
            "farmhouse" => Ok(PropertyType::Farmhouse),
            "penthouse" => Ok(PropertyType::Penthouse),
            "bungalow" => Ok(PropertyType::Bungalow),
            other => Err(format!("Unknown property type: {}", other)),
        }
    }
}

/// Possession status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Possession {
    Ready,
    UnderConstruction,
    NewLaunch,
}

impl Possession {
    pub fn as_str(&self) -> &'static str {
        match self {
            Possession::Ready => "ready",
            Possession::UnderConstruction => "under-construction",
            Possession::NewLaunch => "new-launch",
        }
    }
}

impl fmt::Display for Possession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Possession {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ready" => Ok(Possession::Ready),
            "under-construction" => Ok(Possession::UnderConstruction),
            "new-launch" => Ok(Possession::NewLaunch),
            other => Err(format!("Unknown possession status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Furnishing {
    Unfurnished,
    SemiFurnished,
    Furnished,
}

impl Furnishing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Furnishing::Unfurnished => "unfurnished",
            Furnishing::SemiFurnished => "semi-furnished",
            Furnishing::Furnished => "furnished",
        }
    }
}

impl fmt::Display for Furnishing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Furnishing {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unfurnished" => Ok(Furnishing::Unfurnished),
            "semi-furnished" => Ok(Furnishing::SemiFurnished),
            "furnished" => Ok(Furnishing::Furnished),
            other => Err(format!("Unknown furnishing status: {}", other)),
        }
    }
}

/// A single property listing.
///
/// Records are immutable after catalog load; the catalog owns them and
/// everything downstream works on borrowed or cloned values. Field names on
/// the wire follow the upstream listing data format (camelCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: PropertyId,
    pub title: String,
    pub description: String,
    /// City name.
    pub location: String,
    pub address: String,
    pub property_type: PropertyType,
    pub possession: Possession,
    pub furnishing: Furnishing,
    /// Whole currency units (₹), no minor units.
    pub price: u64,
    /// Square feet.
    pub area: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub garages: u32,
    pub amenities: Vec<String>,
    pub year_built: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
}

impl PropertyRecord {
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }
}
