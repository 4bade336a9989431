//! Hourly activity templates.
//!
//! Full days share one template. Arrival and departure days depend on
//! whether the traveller keeps a base hotel or moves on every stop.

use serde::{Deserialize, Serialize};

use crate::domain::{ClockTime, ScheduledActivity, TravelStyle};

/// Which day of a stay a schedule is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Arrival,
    Full,
    Departure,
}

fn at(hour: u32, minute: u32, activity: String) -> ScheduledActivity {
    // Template times are literals within range
    let time = ClockTime::from_hm(hour, minute).unwrap_or_default();
    ScheduledActivity::new(time, activity)
}

/// Schedule for one day at `destination`.
pub fn day_schedule(
    kind: DayKind,
    style: TravelStyle,
    destination: &str,
) -> Vec<ScheduledActivity> {
    match (kind, style) {
        (DayKind::Full, _) => full_day(destination),
        (DayKind::Arrival, TravelStyle::BaseHotel) => vec![
            at(12, 0, format!("Arrive in {destination}")),
            at(13, 0, "Lunch near the base hotel".to_string()),
            at(14, 0, "Check in at base hotel".to_string()),
            at(16, 0, format!("Orientation walk around {destination}")),
            at(19, 30, "Dinner at base hotel".to_string()),
        ],
        (DayKind::Arrival, TravelStyle::Mobile) => vec![
            at(12, 0, format!("Arrive in {destination}")),
            at(12, 30, format!("Check in at hotel in {destination}")),
            at(13, 30, format!("Lunch in {destination}")),
            at(15, 0, format!("Evening sightseeing in {destination}")),
            at(19, 30, format!("Dinner in {destination}")),
        ],
        (DayKind::Departure, TravelStyle::BaseHotel) => vec![
            at(8, 0, "Breakfast at base hotel".to_string()),
            at(9, 30, format!("Day trip to {destination}")),
            at(13, 0, format!("Lunch in {destination}")),
            at(16, 0, "Return to base hotel".to_string()),
            at(19, 30, "Dinner at base hotel".to_string()),
        ],
        (DayKind::Departure, TravelStyle::Mobile) => vec![
            at(7, 30, "Breakfast at hotel".to_string()),
            at(8, 30, format!("Check out from hotel in {destination}")),
            at(9, 0, format!("Depart from {destination}")),
        ],
    }
}

/// Standard exploration day.
pub fn full_day(destination: &str) -> Vec<ScheduledActivity> {
    vec![
        at(8, 0, "Breakfast at hotel".to_string()),
        at(9, 30, format!("Explore {destination}")),
        at(13, 0, "Lunch at local restaurant".to_string()),
        at(15, 0, format!("Visit nearby attractions in {destination}")),
        at(19, 30, "Dinner".to_string()),
    ]
}

/// Extra exploration day once every destination has been visited.
pub fn additional_day(destination: &str) -> Vec<ScheduledActivity> {
    vec![
        at(8, 30, "Leisurely breakfast".to_string()),
        at(10, 0, format!("Additional day: discover hidden spots of {destination}")),
        at(13, 30, "Try regional cuisine for lunch".to_string()),
        at(15, 30, format!("Shopping at local markets in {destination}")),
        at(19, 0, "Cultural evening and dinner".to_string()),
    ]
}

/// Activity strings of a schedule, in order.
pub fn activity_names(schedule: &[ScheduledActivity]) -> Vec<String> {
    schedule.iter().map(|a| a.activity.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times(schedule: &[ScheduledActivity]) -> Vec<String> {
        schedule.iter().map(|a| a.time.to_string()).collect()
    }

    #[test]
    fn full_day_template() {
        let schedule = full_day("Taj Mahal");
        assert_eq!(times(&schedule), vec!["08:00", "09:30", "13:00", "15:00", "19:30"]);
        assert_eq!(schedule[1].activity, "Explore Taj Mahal");
    }

    #[test]
    fn full_day_ignores_style() {
        assert_eq!(
            day_schedule(DayKind::Full, TravelStyle::BaseHotel, "Amber Fort"),
            day_schedule(DayKind::Full, TravelStyle::Mobile, "Amber Fort"),
        );
    }

    #[test]
    fn arrival_and_departure_depend_on_style() {
        for kind in [DayKind::Arrival, DayKind::Departure] {
            assert_ne!(
                day_schedule(kind, TravelStyle::BaseHotel, "Red Fort"),
                day_schedule(kind, TravelStyle::Mobile, "Red Fort"),
            );
        }
    }

    #[test]
    fn schedules_are_chronological() {
        let kinds = [DayKind::Arrival, DayKind::Full, DayKind::Departure];
        let styles = [TravelStyle::BaseHotel, TravelStyle::Mobile];
        for kind in kinds {
            for style in styles {
                let schedule = day_schedule(kind, style, "X");
                assert!(schedule.windows(2).all(|w| w[0].time < w[1].time));
            }
        }
        assert!(additional_day("X").windows(2).all(|w| w[0].time < w[1].time));
    }

    #[test]
    fn additional_day_is_distinct() {
        assert_ne!(
            activity_names(&additional_day("Taj Mahal")),
            activity_names(&full_day("Taj Mahal"))
        );
    }

    #[test]
    fn day_kind_lowercase() {
        let kind: DayKind = serde_json::from_str("\"departure\"").unwrap();
        assert_eq!(kind, DayKind::Departure);
    }
}
