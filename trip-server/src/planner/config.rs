//! Planner configuration.
//!
//! Every constant the calculations depend on lives here so that a
//! deployment can override individual values from a JSON file.

use serde::{Deserialize, Serialize};

use crate::domain::{HotelTier, PerMode, TransportMode};

use super::error::InvalidConfig;

/// Nightly per-person price estimates used when no catalog hotel matches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierPrices {
    pub budget: f64,
    pub standard: f64,
    pub luxury: f64,
}

impl TierPrices {
    pub fn get(&self, tier: HotelTier) -> f64 {
        match tier {
            HotelTier::Budget => self.budget,
            HotelTier::Standard => self.standard,
            HotelTier::Luxury => self.luxury,
        }
    }
}

/// Configuration parameters for trip planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlannerConfig {
    /// Average speed per mode (km/h).
    pub speed_kmh: PerMode,

    /// Fixed boarding and security time added to every flight (hours).
    pub flight_overhead_hours: f64,

    /// Comfortable travel hours per day, also the sightseeing hours per day.
    pub travel_hours_per_day: f64,

    /// Default per-km fare per mode. Catalog transport entries may override.
    pub rate_per_km: PerMode,

    /// Fixed flight fare added to the scaled per-km component.
    pub flight_base_fare: f64,

    /// Scale applied to the per-km component of a flight fare.
    pub flight_distance_factor: f64,

    /// Fraction taken off the transport cost for premium users.
    pub premium_transport_discount: f64,

    /// Nightly estimates when no catalog hotel of the tier exists.
    pub hotel_fallback: TierPrices,

    /// Adult entry fee assumed for destinations without a price.
    pub entry_fee_fallback: f64,

    /// Hour of day at which transit days depart.
    pub departure_hour: u32,

    /// Hours of road or rail travel between fresh-up stops.
    pub fresh_up_interval_hours: u32,

    /// Number of nearby hotels shown per destination.
    pub nearby_hotel_limit: usize,

    /// Longest trip, in days, that requests may ask for.
    pub max_trip_days: u32,
}

fn check(ok: bool, field: &'static str, requirement: &'static str) -> Result<(), InvalidConfig> {
    if ok {
        Ok(())
    } else {
        Err(InvalidConfig { field, requirement })
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl PlannerConfig {
    /// Parse a configuration, filling unspecified fields with defaults.
    ///
    /// The result is not range-checked; see [`PlannerConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check that every value is usable by the calculations.
    ///
    /// Speeds must be at least 1 km/h, travel hours per day positive, rates
    /// and fares non-negative, the premium discount a fraction in `[0, 1]`, and the
    /// departure hour a valid hour of day.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        for mode in TransportMode::ALL {
            let speed = self.speed_kmh.get(mode);
            check(speed.is_finite() && speed >= 1.0, "speedKmh", "must be at least 1")?;
            check(non_negative(self.rate_per_km.get(mode)), "ratePerKm", "must not be negative")?;
        }
        for tier in [HotelTier::Budget, HotelTier::Standard, HotelTier::Luxury] {
            check(
                non_negative(self.hotel_fallback.get(tier)),
                "hotelFallback",
                "must not be negative",
            )?;
        }
        check(
            non_negative(self.flight_overhead_hours),
            "flightOverheadHours",
            "must not be negative",
        )?;
        check(
            positive(self.travel_hours_per_day),
            "travelHoursPerDay",
            "must be positive",
        )?;
        check(
            non_negative(self.flight_base_fare),
            "flightBaseFare",
            "must not be negative",
        )?;
        check(
            non_negative(self.flight_distance_factor),
            "flightDistanceFactor",
            "must not be negative",
        )?;
        check(
            (0.0..=1.0).contains(&self.premium_transport_discount),
            "premiumTransportDiscount",
            "must be between 0 and 1",
        )?;
        check(
            non_negative(self.entry_fee_fallback),
            "entryFeeFallback",
            "must not be negative",
        )?;
        check(self.departure_hour < 24, "departureHour", "must be below 24")?;
        check(self.max_trip_days > 0, "maxTripDays", "must be at least 1")?;
        Ok(())
    }

    /// Fixed time overhead of a mode (hours).
    pub fn overhead_hours(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Flight => self.flight_overhead_hours,
            _ => 0.0,
        }
    }

    /// Exact travel time for a segment (hours).
    ///
    /// A zero-length segment takes no time in any mode.
    pub fn travel_hours(&self, mode: TransportMode, distance_km: f64) -> f64 {
        if distance_km <= 0.0 {
            return 0.0;
        }
        distance_km / self.speed_kmh.get(mode) + self.overhead_hours(mode)
    }

    /// Travel time as listed in the distance matrix (hours).
    ///
    /// The moving time is rounded to whole hours; the flight overhead is
    /// added afterwards and so keeps its fraction.
    pub fn timetable_hours(&self, mode: TransportMode, distance_km: f64) -> f64 {
        if distance_km <= 0.0 {
            return 0.0;
        }
        (distance_km / self.speed_kmh.get(mode)).round() + self.overhead_hours(mode)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            speed_kmh: PerMode {
                bus: 45.0,
                train: 60.0,
                flight: 500.0,
                car: 50.0,
            },
            flight_overhead_hours: 1.5,
            travel_hours_per_day: 8.0,
            rate_per_km: PerMode {
                bus: 2.5,
                train: 3.5,
                flight: 5.0,
                car: 12.0,
            },
            flight_base_fare: 2500.0,
            flight_distance_factor: 0.8,
            premium_transport_discount: 0.10,
            hotel_fallback: TierPrices {
                budget: 1500.0,
                standard: 3000.0,
                luxury: 8000.0,
            },
            entry_fee_fallback: 500.0,
            departure_hour: 9,
            fresh_up_interval_hours: 3,
            nearby_hotel_limit: 3,
            max_trip_days: 365,
        }
    }
}
