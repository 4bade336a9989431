//! Catalog fixtures shared by unit tests.

use std::collections::BTreeMap;

use super::Catalog;
use crate::domain::{
    Coordinates, Destination, DestinationId, Guide, Hotel, HotelLocation, HotelTier, Price,
};

pub fn coords(lat: f64, lng: f64) -> Coordinates {
    Coordinates::new(lat, lng).unwrap()
}

pub fn destination(id: &str, name: &str, location: Option<(f64, f64)>) -> Destination {
    Destination {
        id: DestinationId::from(id),
        name: name.to_string(),
        city: name.to_string(),
        state: "Test State".to_string(),
        description: String::new(),
        image: String::new(),
        crowd_data: BTreeMap::new(),
        price: Some(Price::Flat(100.0)),
        rating: 4.5,
        coordinates: location.map(|(lat, lng)| coords(lat, lng)),
        best_time_to_visit: String::new(),
        tags: Vec::new(),
    }
}

pub fn hotel(
    id: &str,
    destination_id: &str,
    tier: HotelTier,
    price: f64,
    location: Option<(f64, f64)>,
) -> Hotel {
    Hotel {
        id: id.to_string(),
        destination_id: DestinationId::from(destination_id),
        name: format!("Hotel {id}"),
        tier,
        rating: 4.0,
        price_per_person: price,
        check_in: "14:00".to_string(),
        check_out: "11:00".to_string(),
        amenities: Vec::new(),
        location: HotelLocation {
            address: String::new(),
            city: String::new(),
            coordinates: location.map(|(lat, lng)| coords(lat, lng)),
            distance_from_center: None,
            proximity_score: None,
        },
    }
}

pub fn guide(id: &str, price_per_day: f64) -> Guide {
    Guide {
        id: id.to_string(),
        name: format!("Guide {id}"),
        destination_id: None,
        languages: vec!["English".to_string()],
        price_per_day,
        rating: 4.5,
    }
}

/// Agra, Jaipur and Delhi with two hotels each.
pub fn golden_triangle() -> Catalog {
    let mut agra = destination("agra", "Taj Mahal", Some((27.1751, 78.0421)));
    agra.price = Some(Price::Structured {
        adult: 1100.0,
        child: 0.0,
        foreigner: 1300.0,
        includes: vec!["Shoe covers".to_string()],
    });
    let jaipur = destination("jaipur", "Amber Fort", Some((26.9855, 75.8513)));
    let delhi = destination("delhi", "Red Fort", Some((28.6562, 77.2410)));

    let hotels = vec![
        hotel("agra-near", "agra", HotelTier::Standard, 3200.0, Some((27.1700, 78.0450))),
        hotel("agra-far", "agra", HotelTier::Budget, 1400.0, Some((27.2300, 78.1000))),
        hotel("jaipur-near", "jaipur", HotelTier::Standard, 2800.0, Some((26.9800, 75.8500))),
        hotel("jaipur-far", "jaipur", HotelTier::Luxury, 9000.0, Some((26.9000, 75.8000))),
        hotel("delhi-near", "delhi", HotelTier::Standard, 3600.0, Some((28.6500, 77.2400))),
        hotel("delhi-far", "delhi", HotelTier::Budget, 1600.0, Some((28.5500, 77.1000))),
    ];

    let guides = vec![guide("g1", 1500.0), guide("g2", 2000.0)];

    Catalog::new(vec![agra, jaipur, delhi], hotels, Vec::new(), guides).unwrap()
}
