//! Great-circle distance.

use crate::domain::{Coordinates, Destination};

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two points given in degrees.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = ((delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2))
    .min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance between two coordinate pairs.
pub fn haversine_km(from: &Coordinates, to: &Coordinates) -> f64 {
    distance_km(from.lat(), from.lng(), to.lat(), to.lng())
}

/// Distance between two destinations, or 0 if either lacks coordinates.
pub fn segment_distance_km(from: &Destination, to: &Destination) -> f64 {
    match (&from.coordinates, &to.coordinates) {
        (Some(a), Some(b)) => haversine_km(a, b),
        _ => 0.0,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn lat() -> impl Strategy<Value = f64> {
        -90.0f64..=90.0
    }

    fn lng() -> impl Strategy<Value = f64> {
        -180.0f64..=180.0
    }

    proptest! {
        #[test]
        fn identical_points_have_zero_distance(a in lat(), b in lng()) {
            prop_assert_eq!(distance_km(a, b, a, b), 0.0);
        }

        #[test]
        fn distance_is_symmetric(lat1 in lat(), lng1 in lng(), lat2 in lat(), lng2 in lng()) {
            let there = distance_km(lat1, lng1, lat2, lng2);
            let back = distance_km(lat2, lng2, lat1, lng1);
            prop_assert!((there - back).abs() < 1e-6, "{} vs {}", there, back);
        }

        #[test]
        fn distance_is_bounded(lat1 in lat(), lng1 in lng(), lat2 in lat(), lng2 in lng()) {
            let dist = distance_km(lat1, lng1, lat2, lng2);
            // Never more than half the circumference
            prop_assert!((0.0..=EARTH_RADIUS_KM * std::f64::consts::PI + 1e-6).contains(&dist));
        }
    }
}
