//! Sequential distance matrix.
//!
//! The matrix follows the caller's destination order exactly: entry `i`
//! covers the hop from destination `i` to destination `i + 1`. The route is
//! never reordered.

use serde::Serialize;

use crate::domain::{Destination, DestinationId, PerMode, TransportMode};

use super::config::PlannerConfig;
use super::geo::segment_distance_km;

/// One hop of the route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixEntry {
    pub from_id: DestinationId,
    pub to_id: DestinationId,
    pub from_name: String,
    pub to_name: String,
    pub distance_km: f64,
    /// Timetable hours per mode (see [`PlannerConfig::timetable_hours`]).
    pub travel_times_by_transport: PerMode,
}

impl MatrixEntry {
    /// Timetable hours for one mode.
    pub fn travel_time(&self, mode: TransportMode) -> f64 {
        self.travel_times_by_transport.get(mode)
    }
}

/// Build the matrix for an ordered list of destinations.
///
/// Fewer than two destinations give an empty matrix.
pub fn build_matrix(destinations: &[&Destination], config: &PlannerConfig) -> Vec<MatrixEntry> {
    destinations
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let distance_km = segment_distance_km(from, to);
            MatrixEntry {
                from_id: from.id.clone(),
                to_id: to.id.clone(),
                from_name: from.name.clone(),
                to_name: to.name.clone(),
                distance_km,
                travel_times_by_transport: PerMode::from_fn(|mode| {
                    config.timetable_hours(mode, distance_km)
                }),
            }
        })
        .collect()
}

/// Total route distance (km).
pub fn total_distance_km(matrix: &[MatrixEntry]) -> f64 {
    matrix.iter().map(|e| e.distance_km).sum()
}

/// Total exact travel hours per mode, ignoring timetable rounding.
pub fn total_travel_hours(matrix: &[MatrixEntry], config: &PlannerConfig) -> PerMode {
    matrix
        .iter()
        .map(|e| PerMode::from_fn(|mode| config.travel_hours(mode, e.distance_km)))
        .sum()
}
