use std::str::FromStr;

use anyhow::{Context, bail};
use serde::Serialize;
use tripcraft_itinerary::Summary;
use tripcraft_planner::{FormField, Planner};
use tripcraft_shared::{itinerary::DayPlan, parse_iso_date, trip::TripPreferences};

use super::{TerminalClipboard, TerminalNotifier, render_itinerary};

/// Everything the `plan` command collects, in raw form-control values.
#[derive(Debug, Clone, Default)]
pub struct PlanInput {
    pub location: String,
    pub duration: String,
    pub age_range: Option<String>,
    pub group_size: Option<String>,
    pub interests: Vec<String>,
    pub mobility: Option<String>,
    pub budget: Option<String>,
    pub notes: Option<String>,
    /// `YYYY-MM-DD`, defaults to today
    pub date: Option<String>,
    pub removals: Vec<Removal>,
    pub share: bool,
    pub json: bool,
}

/// `<day>:<activity id>` with a 1-based day number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub day: usize,
    pub activity_id: String,
}

impl FromStr for Removal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((day, activity_id)) = s.split_once(':') else {
            bail!("expected <day>:<activity id>, got '{s}'");
        };

        let day = day
            .trim()
            .parse::<usize>()
            .with_context(|| format!("invalid day in '{s}'"))?;

        if day == 0 {
            bail!("days are numbered from 1, got '{s}'");
        }

        Ok(Self {
            day,
            activity_id: activity_id.trim().to_owned(),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanOutput<'a> {
    trip: &'a TripPreferences,
    summary: Summary,
    itinerary: &'a [DayPlan],
    #[serde(skip_serializing_if = "Option::is_none")]
    share_link: Option<String>,
}

pub fn plan(config: crate::config::Config, input: PlanInput) -> anyhow::Result<()> {
    let origin = config.share.origin_url()?;
    let clipboard = TerminalClipboard {
        echo: !input.json,
        last: None,
    };
    let mut planner = Planner::new(origin, clipboard, TerminalNotifier);

    planner.start_planning()?;
    planner.update_raw(FormField::Location, &input.location)?;
    planner.update_raw(FormField::Duration, &input.duration)?;

    let optional = [
        (FormField::AgeRange, &input.age_range),
        (FormField::GroupSize, &input.group_size),
        (FormField::Mobility, &input.mobility),
        (FormField::Budget, &input.budget),
        (FormField::AdditionalNotes, &input.notes),
    ];
    for (field, value) in optional {
        if let Some(value) = value {
            planner.update_raw(field, value)?;
        }
    }

    for interest in &input.interests {
        planner.toggle_interest(interest.as_str(), true)?;
    }

    if !planner.can_submit() {
        bail!("a destination and a trip duration are required");
    }

    match &input.date {
        Some(date) => planner.submit_on(parse_iso_date(date)?)?,
        None => planner.submit()?,
    }

    for removal in &input.removals {
        planner.remove_activity(removal.day - 1, &removal.activity_id)?;
    }

    if input.json {
        if input.share {
            planner.share()?;
        }

        let state = planner.state();
        let Some(trip) = state.trip.as_ref() else {
            bail!("itinerary was not created");
        };
        let output = PlanOutput {
            trip,
            summary: planner.summary()?,
            itinerary: &state.itinerary,
            share_link: planner.clipboard().last.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);

        return Ok(());
    }

    let state = planner.state();
    let Some(trip) = state.trip.as_ref() else {
        bail!("itinerary was not created");
    };
    print!("{}", render_itinerary(trip, &state.itinerary)?);

    if input.share {
        planner.share()?;
    }

    Ok(())
}
