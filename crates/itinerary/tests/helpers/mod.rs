#![allow(dead_code)]

use time::{Date, macros::date};
use tripcraft_shared::trip::{TripDuration, TripPreferences};

pub const START: Date = date!(2026 - 10 - 19);

pub fn preferences(duration: Option<TripDuration>) -> TripPreferences {
    TripPreferences {
        location: "Lisbon".to_owned(),
        duration: duration.map(Into::into),
        ..Default::default()
    }
}
