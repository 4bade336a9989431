//! Feasibility checks and transport recommendation.

use serde::{Deserialize, Serialize};

use crate::domain::{Destination, DestinationId, PerMode, TransportMode};

use super::config::PlannerConfig;
use super::matrix::{MatrixEntry, build_matrix, total_distance_km, total_travel_hours};

/// Routes longer than this are best flown (km).
const LONG_DISTANCE_KM: f64 = 1000.0;

/// Routes longer than this are best taken by train (km).
const MEDIUM_DISTANCE_KM: f64 = 300.0;

/// Trips longer than this many days suit a car.
const LONG_TRIP_DAYS: u32 = 7;

const PREMIUM_ADVANTAGES: [&str; 3] = [
    "Priority boarding",
    "Extra luggage allowance",
    "Flexible cancellation",
];

/// Request to check whether a trip fits in the requested days.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityRequest {
    pub destination_ids: Vec<DestinationId>,
    pub transport_type: TransportMode,
    pub number_of_days: u32,
}

/// Outcome of a feasibility check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityReport {
    pub feasible: bool,
    pub days_needed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_short: Option<u32>,
    pub total_distance: f64,
    pub total_travel_hours: f64,
    pub breakdown: Vec<MatrixEntry>,
}

/// Check whether `number_of_days` covers the travel plus one sightseeing
/// day per destination.
///
/// Days needed are `ceil(travel_hours / travel_hours_per_day)` plus the
/// number of destinations.
pub fn check_feasibility(
    destinations: &[&Destination],
    mode: TransportMode,
    number_of_days: u32,
    config: &PlannerConfig,
) -> FeasibilityReport {
    let breakdown = build_matrix(destinations, config);
    let total_distance = total_distance_km(&breakdown);
    let total_travel_hours = total_travel_hours(&breakdown, config).get(mode);

    // Float-to-int casts saturate
    let travel_days = (total_travel_hours / config.travel_hours_per_day).ceil() as u32;
    let days_needed = travel_days.saturating_add(destinations.len() as u32);
    let feasible = number_of_days >= days_needed;

    FeasibilityReport {
        feasible,
        days_needed,
        days_short: (!feasible).then(|| days_needed - number_of_days),
        total_distance,
        total_travel_hours,
        breakdown,
    }
}

/// Request for a transport recommendation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestTransportRequest {
    pub destination_ids: Vec<DestinationId>,
    pub number_of_days: u32,
    #[serde(default)]
    pub is_premium: bool,
}

/// Recommended transport for a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportSuggestion {
    pub recommended_type: TransportMode,
    pub alternative_type: TransportMode,
    pub reasoning: String,
    pub total_distance_km: f64,
    pub total_travel_time_hours: PerMode,
    pub time_for_sightseeing: f64,
    pub is_realistic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_advantages: Option<Vec<String>>,
}

/// Recommend a transport mode from route length and trip length.
///
/// First matching rule wins:
/// 1. over 1000 km: flight, else train
/// 2. over 300 km: train, else car
/// 3. over 7 days: car, else bus
/// 4. otherwise: bus, else car
pub fn suggest_transport(
    destinations: &[&Destination],
    number_of_days: u32,
    is_premium: bool,
    config: &PlannerConfig,
) -> TransportSuggestion {
    let matrix = build_matrix(destinations, config);
    let total_distance_km = total_distance_km(&matrix);
    let total_travel_time_hours = total_travel_hours(&matrix, config);

    let (recommended_type, alternative_type, reasoning) = if total_distance_km > LONG_DISTANCE_KM {
        (
            TransportMode::Flight,
            TransportMode::Train,
            format!(
                "Flying is the fastest way to cover long distances \
                 ({total_distance_km:.0} km in total)."
            ),
        )
    } else if total_distance_km > MEDIUM_DISTANCE_KM {
        (
            TransportMode::Train,
            TransportMode::Car,
            format!(
                "Trains are comfortable and reliable over medium distances \
                 ({total_distance_km:.0} km in total)."
            ),
        )
    } else if number_of_days > LONG_TRIP_DAYS {
        (
            TransportMode::Car,
            TransportMode::Bus,
            format!("A car gives the most flexibility on a long trip of {number_of_days} days."),
        )
    } else {
        (
            TransportMode::Bus,
            TransportMode::Car,
            "Buses are the most economical choice for short trips.".to_string(),
        )
    };

    let time_for_sightseeing = f64::from(number_of_days) * config.travel_hours_per_day
        - total_travel_time_hours.get(recommended_type);

    TransportSuggestion {
        recommended_type,
        alternative_type,
        reasoning,
        total_distance_km,
        total_travel_time_hours,
        time_for_sightseeing,
        is_realistic: time_for_sightseeing > 0.0,
        premium_advantages: is_premium
            .then(|| PREMIUM_ADVANTAGES.iter().map(|s| s.to_string()).collect()),
    }
}
