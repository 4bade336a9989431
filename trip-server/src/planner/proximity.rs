//! Hotel proximity scoring and hotel selection.
//!
//! A hotel's proximity score is a 1-10 integer derived from its distance to
//! the destination it serves: 10 for hotels next door, dropping by one for
//! every 2 km, never below 1.

use crate::catalog::Catalog;
use crate::domain::{Destination, Hotel, HotelTier, TravelStyle};

use super::geo::haversine_km;

const MAX_SCORE: u8 = 10;
const MIN_SCORE: u8 = 1;

/// Kilometers per point of score lost.
const KM_PER_POINT: f64 = 2.0;

/// Proximity score for a hotel at `distance_km` from the destination.
///
/// ```
/// use trip_server::planner::proximity_score;
///
/// assert_eq!(proximity_score(0.0), 10);
/// assert_eq!(proximity_score(3.9), 9);
/// assert_eq!(proximity_score(50.0), 1);
/// ```
pub fn proximity_score(distance_km: f64) -> u8 {
    let steps = (distance_km.max(0.0) / KM_PER_POINT).floor();
    if steps >= f64::from(MAX_SCORE - MIN_SCORE) {
        MIN_SCORE
    } else {
        // 0 <= steps < 9, so the cast is exact
        MAX_SCORE - steps as u8
    }
}

/// Score a hotel against its destination.
///
/// Returns a copy with `distance_from_center` and `proximity_score` filled
/// in. If either side has no coordinates both fields are cleared.
pub fn score_proximity(hotel: &Hotel, destination: &Destination) -> Hotel {
    let mut scored = hotel.clone();
    let distance = match (&hotel.location.coordinates, &destination.coordinates) {
        (Some(hotel_at), Some(center)) => Some(haversine_km(hotel_at, center)),
        _ => None,
    };
    scored.location.distance_from_center = distance;
    scored.location.proximity_score = distance.map(proximity_score);
    scored
}

/// Score every hotel in a pool against one destination.
pub fn score_pool(hotels: &[&Hotel], destination: &Destination) -> Vec<Hotel> {
    hotels
        .iter()
        .map(|hotel| score_proximity(hotel, destination))
        .collect()
}

/// Nearest `limit` hotels of a destination, closest first.
///
/// Hotels that could not be scored sort after scored ones, keeping catalog
/// order among themselves.
pub fn nearby_hotels(destination: &Destination, hotels: &[&Hotel], limit: usize) -> Vec<Hotel> {
    let mut scored = score_pool(hotels, destination);
    scored.sort_by(|a, b| {
        let da = a.location.distance_from_center.unwrap_or(f64::INFINITY);
        let db = b.location.distance_from_center.unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });
    scored.truncate(limit);
    scored
}

/// Mean proximity score of the scored hotels, or 0 if none are scored.
pub fn average_proximity_score(hotels: &[Hotel]) -> f64 {
    let scores: Vec<f64> = hotels
        .iter()
        .filter_map(|h| h.location.proximity_score)
        .map(f64::from)
        .collect();

    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Pick one hotel per destination, balancing location quality across stops.
///
/// Each pool is scored against its destination; the mean score over every
/// scored hotel of every pool is the target, and each destination gets the
/// hotel whose score is closest to it. Ties go to the earlier hotel in the
/// pool. A pool with no scored hotel yields its first hotel; an empty pool
/// yields nothing.
pub fn optimal_hotels(pools: &[(&Destination, Vec<&Hotel>)]) -> Vec<Hotel> {
    let scored: Vec<Vec<Hotel>> = pools
        .iter()
        .map(|(destination, hotels)| score_pool(hotels, destination))
        .collect();

    let all: Vec<Hotel> = scored.iter().flatten().cloned().collect();
    let target = average_proximity_score(&all);

    scored
        .into_iter()
        .filter_map(|pool| {
            pool.into_iter().min_by(|a, b| {
                deviation(a, target).total_cmp(&deviation(b, target))
            })
        })
        .collect()
}

fn deviation(hotel: &Hotel, target: f64) -> f64 {
    hotel
        .location
        .proximity_score
        .map(|score| (f64::from(score) - target).abs())
        .unwrap_or(f64::INFINITY)
}

/// Hotel pools for a trip, preferring the requested tier.
///
/// A destination with no hotel of `tier` falls back to all of its hotels.
pub fn tier_pools<'a>(
    catalog: &'a Catalog,
    destinations: &[&'a Destination],
    tier: HotelTier,
) -> Vec<(&'a Destination, Vec<&'a Hotel>)> {
    destinations
        .iter()
        .map(|destination| {
            let all = catalog.hotels_for(&destination.id);
            let of_tier: Vec<&Hotel> = all.iter().copied().filter(|h| h.tier == tier).collect();
            let pool = if of_tier.is_empty() { all } else { of_tier };
            (*destination, pool)
        })
        .collect()
}

/// Hotels for a trip according to the travel style.
///
/// `Mobile` keeps one hotel per destination; `BaseHotel` keeps only the
/// first destination's hotel as the base for the whole trip.
pub fn select_hotels(pools: &[(&Destination, Vec<&Hotel>)], style: TravelStyle) -> Vec<Hotel> {
    let mut hotels = optimal_hotels(pools);
    if style == TravelStyle::BaseHotel {
        hotels.truncate(1);
    }
    hotels
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn score_in_range(distance in 0.0f64..20_000.0) {
            let score = proximity_score(distance);
            prop_assert!((1..=10).contains(&score));
        }

        #[test]
        fn score_non_increasing(a in 0.0f64..100.0, b in 0.0f64..100.0) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(proximity_score(near) >= proximity_score(far));
        }
    }
}
