//! Local guides.

use serde::{Deserialize, Serialize};

use super::DestinationId;

/// A guide that can be hired by the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub destination_id: Option<DestinationId>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub price_per_day: f64,
    #[serde(default)]
    pub rating: f64,
}
