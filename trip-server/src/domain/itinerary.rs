//! Itinerary day types.
//!
//! An itinerary is a contiguous list of days, numbered from 1, each either
//! spent exploring one destination or travelling to the next.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ClockTime, Coordinates, DestinationId, Hotel, TransportMode};

/// How the traveller uses hotels across a multi-stop trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelStyle {
    /// Stay in one hotel and take day trips out.
    BaseHotel,
    /// Change hotels at every destination.
    #[default]
    Mobile,
}

/// One entry of an hourly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledActivity {
    pub time: ClockTime,
    pub activity: String,
}

impl ScheduledActivity {
    pub fn new(time: ClockTime, activity: impl Into<String>) -> Self {
        Self {
            time,
            activity: activity.into(),
        }
    }
}

/// Travel details of a transit day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportDetails {
    pub mode: TransportMode,
    pub from_id: DestinationId,
    pub to_id: DestinationId,
    pub distance_km: f64,
    /// Travel time in whole hours as used for the timetable.
    pub travel_hours: u32,
    pub departure: ClockTime,
    pub arrival: ClockTime,
    /// Number of midnights between departure and arrival.
    pub arrival_day_offset: u32,
}

/// A rest stop on a long road or rail segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreshUpStop {
    pub time: ClockTime,
    /// Hours of travel completed when the stop is reached.
    pub after_hours: u32,
    pub description: String,
    /// Approximate position, when both ends of the segment are located.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// One day of a generated itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    /// 1-based position in the itinerary.
    pub day: u32,
    pub date: NaiveDate,
    pub destination_id: DestinationId,
    pub destination_name: String,
    pub activities: Vec<String>,
    pub is_transit_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_details: Option<TransportDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_schedule: Option<Vec<ScheduledActivity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotels: Option<Vec<Hotel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fresh_up_stops: Option<Vec<FreshUpStop>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_style_kebab_case() {
        let style: TravelStyle = serde_json::from_str("\"base-hotel\"").unwrap();
        assert_eq!(style, TravelStyle::BaseHotel);
        assert_eq!(
            serde_json::to_string(&TravelStyle::Mobile).unwrap(),
            "\"mobile\""
        );
        assert_eq!(TravelStyle::default(), TravelStyle::Mobile);
    }

    #[test]
    fn exploration_day_omits_transit_fields() {
        let day = ItineraryDay {
            day: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            destination_id: "taj-mahal".into(),
            destination_name: "Taj Mahal".into(),
            activities: vec!["Breakfast".into()],
            is_transit_day: false,
            transport_details: None,
            detailed_schedule: None,
            hotels: None,
            fresh_up_stops: None,
        };

        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["date"], "2025-01-10");
        assert_eq!(json["isTransitDay"], false);
        assert!(json.get("transportDetails").is_none());
        assert!(json.get("freshUpStops").is_none());
    }
}
