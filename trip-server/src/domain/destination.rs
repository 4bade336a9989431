//! Destinations and their entry prices.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ClockTime, Coordinates};

/// Catalog identifier of a destination.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(String);

impl DestinationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DestinationId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Entry price of a destination.
///
/// The catalog carries either a single flat fare or a fare per visitor
/// category. On the wire this is a bare number or an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Flat(f64),
    Structured {
        adult: f64,
        #[serde(default)]
        child: f64,
        #[serde(default)]
        foreigner: f64,
        #[serde(default)]
        includes: Vec<String>,
    },
}

impl Price {
    /// Fare for one adult visitor.
    pub fn adult(&self) -> f64 {
        match self {
            Price::Flat(amount) => *amount,
            Price::Structured { adult, .. } => *adult,
        }
    }
}

/// A point of interest in the catalog.
///
/// Immutable reference data; the planner only ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    /// Occupancy percentage (0-100) keyed by "HH:MM" labels.
    #[serde(default)]
    pub crowd_data: BTreeMap<String, u8>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub best_time_to_visit: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A labelled crowd-level reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrowdSlot {
    pub time: ClockTime,
    pub occupancy: u8,
}

impl Destination {
    /// Crowd readings with valid labels, in time order.
    ///
    /// Labels that are not "HH:MM" are skipped.
    pub fn crowd_slots(&self) -> Vec<CrowdSlot> {
        let mut slots: Vec<CrowdSlot> = self
            .crowd_data
            .iter()
            .filter_map(|(label, occupancy)| {
                ClockTime::parse_hhmm(label).ok().map(|time| CrowdSlot {
                    time,
                    occupancy: (*occupancy).min(100),
                })
            })
            .collect();
        slots.sort_by_key(|s| s.time);
        slots
    }

    /// Occupancy at `time`, taken from the latest labelled slot at or
    /// before it.
    ///
    /// Returns `None` when no slot precedes `time`.
    pub fn crowd_at(&self, time: ClockTime) -> Option<u8> {
        self.crowd_slots()
            .into_iter()
            .take_while(|s| s.time <= time)
            .last()
            .map(|s| s.occupancy)
    }

    /// The least crowded slot, earliest on ties.
    pub fn quietest_slot(&self) -> Option<CrowdSlot> {
        self.crowd_slots().into_iter().min_by_key(|s| s.occupancy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taj_mahal() -> Destination {
        serde_json::from_str(
            r#"{
                "id": "taj-mahal",
                "name": "Taj Mahal",
                "city": "Agra",
                "state": "Uttar Pradesh",
                "crowdData": {"06:00": 20, "09:00": 65, "12:00": 90, "17:00": 20, "bogus": 5},
                "price": {
                    "adult": 1100, "child": 0, "foreigner": 1300, "includes": ["Shoe covers"]
                },
                "rating": 4.9,
                "coordinates": {"lat": 27.1751, "lng": 78.0421},
                "tags": ["heritage"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn deserialize_structured_price() {
        let dest = taj_mahal();
        match dest.price {
            Some(Price::Structured {
                adult, ref includes, ..
            }) => {
                assert_eq!(adult, 1100.0);
                assert_eq!(includes, &vec!["Shoe covers".to_string()]);
            }
            other => panic!("expected structured price, got {other:?}"),
        }
    }

    #[test]
    fn deserialize_flat_price_and_missing_fields() {
        let dest: Destination = serde_json::from_str(
            r#"{
                "id": "7", "name": "Marine Drive", "city": "Mumbai", "state": "Maharashtra",
                "price": 0
            }"#,
        )
        .unwrap();
        assert_eq!(dest.price, Some(Price::Flat(0.0)));
        assert!(dest.coordinates.is_none());
        assert!(dest.crowd_data.is_empty());
    }

    #[test]
    fn adult_price_for_both_variants() {
        assert_eq!(Price::Flat(50.0).adult(), 50.0);
        let structured = Price::Structured {
            adult: 600.0,
            child: 300.0,
            foreigner: 1100.0,
            includes: vec![],
        };
        assert_eq!(structured.adult(), 600.0);
    }

    #[test]
    fn crowd_at_uses_preceding_slot() {
        let dest = taj_mahal();
        let t = |s| ClockTime::parse_hhmm(s).unwrap();

        assert_eq!(dest.crowd_at(t("05:59")), None);
        assert_eq!(dest.crowd_at(t("06:00")), Some(20));
        assert_eq!(dest.crowd_at(t("10:30")), Some(65));
        assert_eq!(dest.crowd_at(t("23:00")), Some(20));
    }

    #[test]
    fn quietest_slot_prefers_earliest() {
        let slot = taj_mahal().quietest_slot().unwrap();
        assert_eq!(slot.time.to_string(), "06:00");
        assert_eq!(slot.occupancy, 20);
    }

    #[test]
    fn malformed_labels_are_skipped() {
        assert_eq!(taj_mahal().crowd_slots().len(), 4);
    }
}
