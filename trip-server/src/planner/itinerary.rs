//! Day-by-day itinerary generation.
//!
//! Destinations are walked in the caller's order. Each destination gets an
//! exploration day, followed by a transit day to the next destination while
//! days remain. Days left over once every destination has been visited are
//! spent at the last destination.

use chrono::{Days, NaiveDate};
use serde::Deserialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::{
    ClockTime, Destination, DestinationId, FreshUpStop, ItineraryDay, ScheduledActivity,
    TransportDetails, TransportMode, TravelStyle,
};

use super::config::PlannerConfig;
use super::error::PlanError;
use super::geo::segment_distance_km;
use super::proximity::nearby_hotels;
use super::schedule::{activity_names, additional_day, full_day};

/// Request for an itinerary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    pub destination_ids: Vec<DestinationId>,
    pub transport_type: TransportMode,
    pub number_of_days: u32,
    pub start_date: NaiveDate,
    /// Accepted for the hotel selection downstream; the day layout does
    /// not depend on it.
    #[serde(default)]
    pub travel_style: Option<TravelStyle>,
    #[serde(default)]
    pub is_premium: bool,
}

impl ItineraryRequest {
    pub fn validate(&self, config: &PlannerConfig) -> Result<(), PlanError> {
        if self.destination_ids.is_empty() {
            return Err(PlanError::InvalidRequest(
                "at least one destination is required".to_string(),
            ));
        }
        if self.number_of_days == 0 {
            return Err(PlanError::InvalidRequest(
                "number of days must be at least 1".to_string(),
            ));
        }
        if self.number_of_days > config.max_trip_days {
            return Err(PlanError::InvalidRequest(format!(
                "number of days must be at most {}",
                config.max_trip_days
            )));
        }
        Ok(())
    }
}

/// Numbered, dated slots of a trip of fixed length.
struct Calendar {
    start: NaiveDate,
    length: u32,
    days: Vec<ItineraryDay>,
}

impl Calendar {
    fn new(start: NaiveDate, length: u32) -> Self {
        Self {
            start,
            length,
            days: Vec::new(),
        }
    }

    /// Day number and date of the next free slot, if the trip has one.
    fn next_slot(&self) -> Option<(u32, NaiveDate)> {
        let used = self.days.len() as u32;
        if used >= self.length {
            return None;
        }
        let date = self.start.checked_add_days(Days::new(u64::from(used)))?;
        Some((used + 1, date))
    }

    fn push(&mut self, day: ItineraryDay) {
        self.days.push(day);
    }
}

/// Itinerary generator over a catalog.
pub struct ItineraryGenerator<'a> {
    catalog: &'a Catalog,
    config: &'a PlannerConfig,
}

impl<'a> ItineraryGenerator<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Generate the itinerary for resolved `destinations`, in order.
    ///
    /// The result never holds more than `number_of_days` entries. It is
    /// shorter only if the calendar runs out of representable dates.
    pub fn generate(
        &self,
        destinations: &[&Destination],
        request: &ItineraryRequest,
    ) -> Result<Vec<ItineraryDay>, PlanError> {
        request.validate(self.config)?;
        if destinations.is_empty() {
            return Err(PlanError::InvalidRequest(
                "at least one destination is required".to_string(),
            ));
        }

        let mut calendar = Calendar::new(request.start_date, request.number_of_days);

        for (i, current) in destinations.iter().enumerate() {
            let Some((day, date)) = calendar.next_slot() else {
                break;
            };
            calendar.push(self.exploration_day(day, date, current, full_day(&current.name)));

            if let Some(next) = destinations.get(i + 1) {
                let Some((day, date)) = calendar.next_slot() else {
                    break;
                };
                calendar.push(self.transit_day(day, date, current, next, request.transport_type));
            }
        }

        // Only reachable with days to spare once the route is complete
        if let Some(last) = destinations.last() {
            while let Some((day, date)) = calendar.next_slot() {
                calendar.push(self.exploration_day(day, date, last, additional_day(&last.name)));
            }
        }

        debug!(
            days = calendar.days.len(),
            destinations = destinations.len(),
            "generated itinerary"
        );
        Ok(calendar.days)
    }

    fn exploration_day(
        &self,
        day: u32,
        date: NaiveDate,
        destination: &Destination,
        schedule: Vec<ScheduledActivity>,
    ) -> ItineraryDay {
        let hotels = nearby_hotels(
            destination,
            &self.catalog.hotels_for(&destination.id),
            self.config.nearby_hotel_limit,
        );

        ItineraryDay {
            day,
            date,
            destination_id: destination.id.clone(),
            destination_name: destination.name.clone(),
            activities: activity_names(&schedule),
            is_transit_day: false,
            transport_details: None,
            detailed_schedule: Some(schedule),
            hotels: Some(hotels),
            fresh_up_stops: None,
        }
    }

    fn transit_day(
        &self,
        day: u32,
        date: NaiveDate,
        from: &Destination,
        to: &Destination,
        mode: TransportMode,
    ) -> ItineraryDay {
        let distance_km = segment_distance_km(from, to);
        let travel_hours = self.config.timetable_hours(mode, distance_km).round() as u32;

        let departure =
            ClockTime::from_hm(self.config.departure_hour.min(23), 0).unwrap_or_default();
        let (arrival, arrival_day_offset) =
            departure.add_minutes(travel_hours.saturating_mul(60));

        let stops = self.fresh_up_stops(from, to, mode, departure, travel_hours);

        let mut schedule = vec![ScheduledActivity::new(
            departure,
            format!("Depart from {} by {mode}", from.name),
        )];
        schedule.extend(
            stops
                .iter()
                .map(|stop| ScheduledActivity::new(stop.time, stop.description.clone())),
        );
        let arrival_note = match arrival_day_offset {
            0 => format!("Arrive in {}", to.name),
            1 => format!("Arrive in {} the next day", to.name),
            n => format!("Arrive in {} after {n} nights of travel", to.name),
        };
        schedule.push(ScheduledActivity::new(arrival, arrival_note));

        let hotels = nearby_hotels(
            to,
            &self.catalog.hotels_for(&to.id),
            self.config.nearby_hotel_limit,
        );

        ItineraryDay {
            day,
            date,
            destination_id: to.id.clone(),
            destination_name: to.name.clone(),
            activities: activity_names(&schedule),
            is_transit_day: true,
            transport_details: Some(TransportDetails {
                mode,
                from_id: from.id.clone(),
                to_id: to.id.clone(),
                distance_km,
                travel_hours,
                departure,
                arrival,
                arrival_day_offset,
            }),
            detailed_schedule: Some(schedule),
            hotels: Some(hotels),
            fresh_up_stops: Some(stops),
        }
    }

    /// Rest stops every `fresh_up_interval_hours` of travel, strictly
    /// before arrival. Flights have none.
    fn fresh_up_stops(
        &self,
        from: &Destination,
        to: &Destination,
        mode: TransportMode,
        departure: ClockTime,
        travel_hours: u32,
    ) -> Vec<FreshUpStop> {
        let interval = self.config.fresh_up_interval_hours;
        if mode == TransportMode::Flight || interval == 0 {
            return Vec::new();
        }

        (interval..travel_hours)
            .step_by(interval as usize)
            .map(|after_hours| {
                let (time, _) = departure.add_minutes(after_hours.saturating_mul(60));
                let coordinates = match (&from.coordinates, &to.coordinates) {
                    (Some(a), Some(b)) => {
                        Some(a.lerp(b, f64::from(after_hours) / f64::from(travel_hours)))
                    }
                    _ => None,
                };
                FreshUpStop {
                    time,
                    after_hours,
                    description: format!("Fresh-up stop after {after_hours} hours of travel"),
                    coordinates,
                }
            })
            .collect()
    }
}
