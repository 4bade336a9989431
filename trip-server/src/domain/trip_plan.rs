//! The trip plan aggregate handed to the booking store.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DestinationId, DomainError, Hotel, HotelTier, ItineraryDay, TransportMode, TravelStyle};

/// Booking lifecycle of a trip plan.
///
/// Plans start `Pending`. A pending plan may be confirmed or cancelled, and a
/// confirmed plan may be cancelled. `Cancelled` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Whether moving from `self` to `next` is allowed.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cost components of a trip, in the catalog currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub transport_cost: f64,
    pub hotels_cost: f64,
    pub destinations_cost: f64,
    pub guides_cost: f64,
    pub total_cost: f64,
}

impl CostEstimate {
    /// Assemble an estimate; the total is the sum of the four components.
    pub fn new(
        transport_cost: f64,
        hotels_cost: f64,
        destinations_cost: f64,
        guides_cost: f64,
    ) -> Self {
        Self {
            transport_cost,
            hotels_cost,
            destinations_cost,
            guides_cost,
            total_cost: transport_cost + hotels_cost + destinations_cost + guides_cost,
        }
    }
}

/// A fully computed trip, ready to be persisted by the booking store.
///
/// The store assigns the id and timestamps; the plan itself is only ever
/// changed afterwards through [`TripPlan::transition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub destination_ids: Vec<DestinationId>,
    pub transport_type: TransportMode,
    pub hotel_type: HotelTier,
    pub number_of_days: u32,
    pub number_of_people: u32,
    pub start_date: NaiveDate,
    pub travel_style: TravelStyle,
    pub is_premium: bool,
    pub itinerary: Vec<ItineraryDay>,
    pub hotels: Vec<Hotel>,
    pub hotel_proximity_score: f64,
    pub cost: CostEstimate,
    pub status: BookingStatus,
}

impl TripPlan {
    /// Move the plan to `next`, rejecting transitions the lifecycle forbids.
    pub fn transition(&mut self, next: BookingStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    pub fn confirm(&mut self) -> Result<(), DomainError> {
        self.transition(BookingStatus::Confirmed)
    }

    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.transition(BookingStatus::Cancelled)
    }
}
