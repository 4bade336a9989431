//! Trip planning engine.
//!
//! Everything here is a pure function of the catalog, the configuration and
//! the request: distance matrix, feasibility, transport recommendation, cost
//! estimate, hotel selection and the day-by-day itinerary.

mod config;
mod cost;
mod error;
mod feasibility;
mod geo;
mod itinerary;
mod matrix;
mod proximity;
mod schedule;
mod trip;


pub use config::{PlannerConfig, TierPrices};
pub use cost::{CostEstimator, CostRequest};
pub use error::{InvalidConfig, PlanError};
pub use feasibility::{
    FeasibilityReport, FeasibilityRequest, SuggestTransportRequest, TransportSuggestion,
    check_feasibility, suggest_transport,
};
pub use geo::{distance_km, haversine_km, segment_distance_km};
pub use itinerary::{ItineraryGenerator, ItineraryRequest};
pub use matrix::{MatrixEntry, build_matrix, total_distance_km, total_travel_hours};
pub use proximity::{
    average_proximity_score, nearby_hotels, optimal_hotels, proximity_score, score_proximity,
    select_hotels, tier_pools,
};
pub use schedule::{DayKind, additional_day, day_schedule, full_day};
pub use trip::{PlanRequest, TripPlanner};
