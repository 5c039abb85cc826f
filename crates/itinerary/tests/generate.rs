use time::{Duration, macros::date};
use tripcraft_itinerary::{DEFAULT_DAY_COUNT, catalog, daily_slice, generate, total_cost};
use tripcraft_shared::trip::{Budget, GroupSize, TripDuration, TripPreferences};

mod helpers;

#[test]
fn test_day_count_per_duration() {
    let cases = [
        (Some(TripDuration::OneToTwoDays), 2),
        (Some(TripDuration::ThreeToFiveDays), 4),
        (Some(TripDuration::OneWeek), 7),
        (Some(TripDuration::TwoWeeks), DEFAULT_DAY_COUNT),
        (Some(TripDuration::ThreeWeeks), DEFAULT_DAY_COUNT),
        (Some(TripDuration::OneMonth), DEFAULT_DAY_COUNT),
        (None, DEFAULT_DAY_COUNT),
    ];

    for (duration, expected) in cases {
        let itinerary = generate(&helpers::preferences(duration), helpers::START);
        assert_eq!(itinerary.len(), expected as usize, "{duration:?}");
    }
}

#[test]
fn test_generation_is_deterministic() {
    let preferences = TripPreferences {
        group_size: Some(GroupSize::Large),
        budget: Some(Budget::Luxury),
        interests: ["Museums".to_owned(), "Beaches".to_owned()].into(),
        ..helpers::preferences(Some(TripDuration::OneWeek))
    };

    assert_eq!(
        generate(&preferences, helpers::START),
        generate(&preferences, helpers::START)
    );
}

#[test]
fn test_every_day_gets_the_same_slice() {
    let expected = daily_slice(catalog())
        .iter()
        .map(|a| a.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(expected, ["1", "2", "3"]);

    let itinerary = generate(
        &helpers::preferences(Some(TripDuration::OneWeek)),
        helpers::START,
    );

    for day in &itinerary {
        let ids = day.activities.iter().map(|a| a.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, expected, "day {}", day.day);
    }
}

#[test]
fn test_days_and_dates_are_sequential() {
    let itinerary = generate(
        &helpers::preferences(Some(TripDuration::OneWeek)),
        date!(2026 - 12 - 28),
    );

    assert_eq!(itinerary[0].date, date!(2026 - 12 - 28));
    assert_eq!(itinerary[6].date, date!(2027 - 01 - 03));

    for (index, day) in itinerary.iter().enumerate() {
        assert_eq!(day.day as usize, index + 1);
    }

    for pair in itinerary.windows(2) {
        assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
    }
}

#[test]
fn test_default_slice_costs_eighty_per_day() -> anyhow::Result<()> {
    for duration in [
        Some(TripDuration::OneToTwoDays),
        Some(TripDuration::ThreeToFiveDays),
        Some(TripDuration::OneWeek),
        None,
    ] {
        let itinerary = generate(&helpers::preferences(duration), helpers::START);
        assert_eq!(total_cost(&itinerary)?, 80.0 * itinerary.len() as f64);
    }

    Ok(())
}

#[test]
fn test_itinerary_serializes_for_display() -> anyhow::Result<()> {
    let itinerary = generate(
        &helpers::preferences(Some(TripDuration::OneToTwoDays)),
        helpers::START,
    );

    let value = serde_json::to_value(&itinerary)?;

    assert_eq!(value[0]["day"], 1);
    assert_eq!(value[0]["date"], "2026-10-19");
    assert_eq!(value[1]["date"], "2026-10-20");
    assert_eq!(value[0]["activities"][0]["type"], "sightseeing");
    assert_eq!(
        value[0]["activities"][0]["bookingLink"],
        "https://example.com/book-tour"
    );
    assert!(value[0]["activities"][1].get("bookingLink").is_none());

    Ok(())
}
