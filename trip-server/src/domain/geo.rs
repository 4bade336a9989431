//! Geographic coordinates.

use serde::{Deserialize, Serialize};

use super::DomainError;

/// A latitude/longitude pair in degrees.
///
/// Latitude is within -90..=90 and longitude within -180..=180; values
/// outside those ranges are rejected on construction and deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct RawCoordinates {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = DomainError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Coordinates::new(raw.lat, raw.lng)
    }
}

impl Coordinates {
    /// Create validated coordinates.
    ///
    /// ```
    /// use trip_server::domain::Coordinates;
    ///
    /// let agra = Coordinates::new(27.1751, 78.0421).unwrap();
    /// assert_eq!(agra.lat(), 27.1751);
    ///
    /// assert!(Coordinates::new(90.5, 0.0).is_err());
    /// assert!(Coordinates::new(0.0, -181.0).is_err());
    /// ```
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidCoordinates {
                lat,
                lng,
                reason: "latitude must be within -90..=90",
            });
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(DomainError::InvalidCoordinates {
                lat,
                lng,
                reason: "longitude must be within -180..=180",
            });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Point at `fraction` of the way from `self` to `other`.
    ///
    /// Plain linear interpolation of the degree values; good enough for
    /// placing rest stops along a segment, not for navigation.
    pub fn lerp(&self, other: &Coordinates, fraction: f64) -> Coordinates {
        let f = fraction.clamp(0.0, 1.0);
        Coordinates {
            lat: self.lat + (other.lat - self.lat) * f,
            lng: self.lng + (other.lng - self.lng) * f,
        }
    }
}
