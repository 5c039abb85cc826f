use std::sync::LazyLock;

use tripcraft_shared::itinerary::{Activity, ActivityType};

/// Activities placed on every generated day.
pub const ACTIVITIES_PER_DAY: usize = 3;

static CATALOG: LazyLock<Vec<Activity>> = LazyLock::new(|| {
    vec![
        entry(
            "1",
            "City Walking Tour",
            "Explore the historic downtown area with a local guide",
            "9:00 AM",
            "3 hours",
            "Historic District",
            "$35",
            Some("https://example.com/book-tour"),
            ActivityType::Sightseeing,
        ),
        entry(
            "2",
            "Local Food Market",
            "Taste authentic local cuisine and street food",
            "1:00 PM",
            "2 hours",
            "Central Market",
            "$25",
            None,
            ActivityType::Dining,
        ),
        entry(
            "3",
            "Cultural Museum Visit",
            "Learn about local history and culture",
            "3:30 PM",
            "2 hours",
            "National Museum",
            "$20",
            Some("https://example.com/book-museum"),
            ActivityType::Sightseeing,
        ),
        entry(
            "4",
            "Adventure Sports",
            "Zip-lining through the forest canopy",
            "10:00 AM",
            "4 hours",
            "Adventure Park",
            "$85",
            Some("https://example.com/book-adventure"),
            ActivityType::Activity,
        ),
        entry(
            "5",
            "Fine Dining Experience",
            "Michelin-starred restaurant with local specialties",
            "7:00 PM",
            "2.5 hours",
            "Le Gourmet",
            "$120",
            Some("https://example.com/book-restaurant"),
            ActivityType::Dining,
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    title: &str,
    description: &str,
    time: &str,
    duration: &str,
    location: &str,
    cost: &str,
    booking_link: Option<&str>,
    kind: ActivityType,
) -> Activity {
    Activity {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        time: time.to_owned(),
        duration: duration.to_owned(),
        location: location.to_owned(),
        cost: cost.to_owned(),
        booking_link: booking_link.map(ToOwned::to_owned),
        kind,
    }
}

/// The fixed mock catalog every itinerary draws from.
pub fn catalog() -> &'static [Activity] {
    &CATALOG
}

/// The slice copied onto each day: the first `min(3, N)` catalog entries.
pub fn daily_slice(catalog: &[Activity]) -> &[Activity] {
    &catalog[..ACTIVITIES_PER_DAY.min(catalog.len())]
}

pub fn find(id: &str) -> Option<&'static Activity> {
    catalog().iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids = catalog().iter().map(|a| a.id.as_str()).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn daily_slice_is_bounded_by_catalog_size() {
        assert_eq!(daily_slice(catalog()).len(), 3);
        assert_eq!(daily_slice(&catalog()[..2]).len(), 2);
        assert!(daily_slice(&[]).is_empty());
    }

    #[test]
    fn food_market_has_no_booking_link() {
        let market = find("2").unwrap();
        assert_eq!(market.title, "Local Food Market");
        assert!(market.booking_link.is_none());
        assert_eq!(market.kind, ActivityType::Dining);
    }
}
