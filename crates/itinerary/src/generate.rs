use time::Date;
use tripcraft_shared::{
    add_days,
    itinerary::{Activity, DayPlan},
    trip::{DurationChoice, TripDuration, TripPreferences},
};

use crate::catalog::{catalog, daily_slice};

/// Fallback when the duration is unset, unrecognized or not one of the short
/// trip lengths.
pub const DEFAULT_DAY_COUNT: u32 = 5;

/// Number of days an itinerary covers for the selected trip length.
pub fn day_count(duration: Option<TripDuration>) -> u32 {
    match duration {
        Some(TripDuration::OneToTwoDays) => 2,
        Some(TripDuration::ThreeToFiveDays) => 4,
        Some(TripDuration::OneWeek) => 7,
        _ => DEFAULT_DAY_COUNT,
    }
}

/// Builds the day-by-day plan starting on `today`.
///
/// Every day receives the same leading slice of the catalog. The only input
/// that varies between calls is `today`, so equal preferences and an equal
/// start date always yield the same itinerary.
pub fn generate(preferences: &TripPreferences, today: Date) -> Vec<DayPlan> {
    generate_from(catalog(), preferences, today)
}

/// Same as [`generate`], starting on the current local date.
pub fn generate_today(preferences: &TripPreferences) -> Vec<DayPlan> {
    generate(preferences, tripcraft_shared::today())
}

pub fn generate_from(
    catalog: &[Activity],
    preferences: &TripPreferences,
    today: Date,
) -> Vec<DayPlan> {
    let days = day_count(preferences.duration.as_ref().and_then(DurationChoice::known));
    let activities = daily_slice(catalog);

    tracing::debug!(
        location = %preferences.location,
        duration = ?preferences.duration,
        days,
        start = %today,
        "generating itinerary"
    );

    (0..days)
        .map(|offset| DayPlan {
            day: offset + 1,
            date: add_days(today, offset),
            activities: activities.to_vec(),
        })
        .collect()
}
