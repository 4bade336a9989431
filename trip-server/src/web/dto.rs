//! Data transfer objects for web requests and responses.
//!
//! Planner requests double as request bodies; only the shapes that exist
//! purely for HTTP live here.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinates, CrowdSlot, Destination, DestinationId, Price, TravelStyle};
use crate::planner::DayKind;

/// Query for the destination list.
#[derive(Debug, Default, Deserialize)]
pub struct DestinationsQuery {
    /// Time in HH:MM format for the crowd level
    pub at: Option<String>,
}

/// A destination as listed to the UI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSummary {
    pub id: DestinationId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub tags: Vec<String>,

    /// Least crowded time of day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quietest_slot: Option<CrowdSlot>,

    /// Crowd level at the requested time, if one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crowd_level: Option<u8>,
}

impl DestinationSummary {
    /// Create from a catalog destination.
    pub fn from_destination(destination: &Destination, crowd_level: Option<u8>) -> Self {
        Self {
            id: destination.id.clone(),
            name: destination.name.clone(),
            city: destination.city.clone(),
            state: destination.state.clone(),
            rating: destination.rating,
            price: destination.price.clone(),
            coordinates: destination.coordinates,
            tags: destination.tags.clone(),
            quietest_slot: destination.quietest_slot(),
            crowd_level,
        }
    }
}

/// Request for a distance matrix.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRequest {
    pub destination_ids: Vec<DestinationId>,
}

/// Query for nearby hotels.
#[derive(Debug, Default, Deserialize)]
pub struct HotelsQuery {
    /// Maximum number of hotels (defaults to the configured limit)
    pub limit: Option<usize>,
}

/// Query for a detailed day schedule.
#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    pub kind: DayKind,
    #[serde(default)]
    pub style: TravelStyle,
    /// Destination name used in the activity texts
    pub destination: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
