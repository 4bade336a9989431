//! Domain types for the trip planner.
//!
//! This module contains the catalog records (destinations, hotels,
//! transports, guides) and the records the planner produces (itinerary
//! days, trip plans). Validated types enforce their invariants at
//! construction time.

mod destination;
mod error;
mod geo;
mod guide;
mod hotel;
mod itinerary;
mod time;
mod transport;
mod trip_plan;

pub use destination::{CrowdSlot, Destination, DestinationId, Price};
pub use error::DomainError;
pub use geo::Coordinates;
pub use guide::Guide;
pub use hotel::{Hotel, HotelLocation, HotelTier};
pub use itinerary::{
    FreshUpStop, ItineraryDay, ScheduledActivity, TransportDetails, TravelStyle,
};
pub use time::{ClockTime, TimeError};
pub use transport::{PerMode, TransportMode, TransportOption};
pub use trip_plan::{BookingStatus, CostEstimate, TripPlan};
