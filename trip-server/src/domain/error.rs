//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from catalog loading and planning errors.

use super::BookingStatus;

/// Domain-level errors for validation and state transitions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range
    #[error("invalid coordinates ({lat}, {lng}): {reason}")]
    InvalidCoordinates {
        lat: f64,
        lng: f64,
        reason: &'static str,
    },

    /// Booking status change not permitted from the current status
    #[error("cannot move trip plan from {from} to {to}")]
    InvalidStatusTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
}
