use std::fmt::{self, Write};

use tripcraft_itinerary::Summary;
use tripcraft_shared::{display_date, itinerary::DayPlan, trip::TripPreferences};

const VISIBLE_INTERESTS: usize = 5;

/// Plain-text itinerary for the terminal.
pub fn render_itinerary(
    trip: &TripPreferences,
    itinerary: &[DayPlan],
) -> tripcraft_shared::Result<String> {
    let summary = Summary::of(itinerary)?;
    let mut out = String::new();

    write_itinerary(&mut out, trip, itinerary, &summary).map_err(anyhow::Error::from)?;

    Ok(out)
}

fn write_itinerary(
    out: &mut impl Write,
    trip: &TripPreferences,
    itinerary: &[DayPlan],
    summary: &Summary,
) -> fmt::Result {
    writeln!(out, "Your {} Itinerary", trip.location)?;
    writeln!(
        out,
        "{} • {} • {} budget",
        or_dash(trip.duration.as_ref().map(ToString::to_string)),
        or_dash(trip.group_size.map(|g| g.to_string())),
        or_dash(trip.budget.map(|b| b.to_string())),
    )?;

    if !trip.interests.is_empty() {
        let visible = trip
            .interests
            .iter()
            .take(VISIBLE_INTERESTS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        write!(out, "Interests: {visible}")?;
        match trip.interests.len().saturating_sub(VISIBLE_INTERESTS) {
            0 => writeln!(out)?,
            hidden => writeln!(out, " +{hidden} more")?,
        }
    }

    writeln!(
        out,
        "\nTotal Duration: {} Days | Activities: {} | Estimated Cost: ${}",
        summary.total_days, summary.activity_count, summary.estimated_cost
    )?;

    for day in itinerary {
        writeln!(out, "\nDay {} - {}", day.day, display_date(day.date))?;

        for activity in &day.activities {
            writeln!(
                out,
                "  [{}] {} • {}",
                activity.kind, activity.time, activity.duration
            )?;
            writeln!(out, "  {}", activity.title)?;
            writeln!(out, "  {}", activity.description)?;
            write!(out, "  {} • {}", activity.location, activity.cost)?;
            match &activity.booking_link {
                Some(link) => writeln!(out, " • Book: {link}")?,
                None => writeln!(out)?,
            }
        }
    }

    Ok(())
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use tripcraft_itinerary::{generate, remove_activity};
    use tripcraft_shared::trip::{Budget, DurationChoice, GroupSize, TripDuration};

    fn trip() -> TripPreferences {
        TripPreferences {
            location: "Lisbon".to_owned(),
            duration: Some(TripDuration::OneToTwoDays.into()),
            group_size: Some(GroupSize::Couple),
            budget: Some(Budget::Mid),
            interests: [
                "Art Galleries",
                "Beaches",
                "Food & Dining",
                "Museums",
                "Nightlife",
                "Shopping",
                "Photography",
            ]
            .map(str::to_owned)
            .into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_header_and_days() -> anyhow::Result<()> {
        let trip = trip();
        let itinerary = generate(&trip, date!(2026 - 10 - 19));

        let text = render_itinerary(&trip, &itinerary)?;

        assert!(text.starts_with("Your Lisbon Itinerary\n1-2 • couple • mid budget\n"));
        assert!(text.contains("+2 more"));
        assert!(text.contains("Total Duration: 2 Days | Activities: 6 | Estimated Cost: $160"));
        assert!(text.contains("Day 1 - 10/19/2026"));
        assert!(text.contains("Day 2 - 10/20/2026"));
        assert!(text.contains("  Central Market • $25\n"));
        assert!(text.contains("Book: https://example.com/book-museum"));

        Ok(())
    }

    #[test]
    fn test_render_follows_removals() -> anyhow::Result<()> {
        let trip = trip();
        let itinerary = remove_activity(generate(&trip, date!(2026 - 10 - 19)), 0, "1");

        let text = render_itinerary(&trip, &itinerary)?;

        assert!(text.contains("Activities: 5 | Estimated Cost: $125"));

        Ok(())
    }

    #[test]
    fn test_render_unrecognized_duration_and_few_interests() -> anyhow::Result<()> {
        let trip = TripPreferences {
            location: "Rome".to_owned(),
            duration: Some(DurationChoice::Other("someday".to_owned())),
            interests: ["Beaches", "Museums"].map(str::to_owned).into(),
            ..Default::default()
        };
        let itinerary = generate(&trip, date!(2026 - 10 - 19));

        let text = render_itinerary(&trip, &itinerary)?;

        assert!(text.starts_with("Your Rome Itinerary\nsomeday • - • - budget\n"));
        assert!(text.contains("Interests: Beaches, Museums\n"));
        assert!(!text.contains("more"));
        assert!(text.contains("Total Duration: 5 Days | Activities: 15 | Estimated Cost: $400"));
        assert!(text.contains("Day 5 - 10/23/2026"));

        Ok(())
    }

    #[test]
    fn test_render_unset_fields() -> anyhow::Result<()> {
        let trip = TripPreferences {
            location: "Nowhere".to_owned(),
            ..Default::default()
        };

        let text = render_itinerary(&trip, &[])?;

        assert!(text.contains("- • - • - budget"));
        assert!(!text.contains("Interests"));

        Ok(())
    }
}
