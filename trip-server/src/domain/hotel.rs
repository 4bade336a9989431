//! Hotels and their locations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Coordinates, DestinationId};

/// Price tier of a hotel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotelTier {
    Budget,
    #[default]
    Standard,
    Luxury,
}

impl HotelTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            HotelTier::Budget => "budget",
            HotelTier::Standard => "standard",
            HotelTier::Luxury => "luxury",
        }
    }
}

impl fmt::Display for HotelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a hotel is, plus the proximity fields derived from it.
///
/// `distance_from_center` and `proximity_score` are output only. They are
/// dropped when parsing and filled in by the proximity scorer on a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelLocation {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub distance_from_center: Option<f64>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub proximity_score: Option<u8>,
}

/// A hotel belonging to one destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub destination_id: DestinationId,
    pub name: String,
    #[serde(rename = "type")]
    pub tier: HotelTier,
    #[serde(default)]
    pub rating: f64,
    pub price_per_person: f64,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub location: HotelLocation,
}
