use serde::Serialize;
use tripcraft_shared::itinerary::DayPlan;

/// Short acknowledgement surfaced to the traveller after an action.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// Drops `activity_id` from the day at `day_index` (0-based).
///
/// Other days are returned untouched. An unknown day or activity leaves the
/// itinerary as it was.
pub fn remove_activity(
    itinerary: Vec<DayPlan>,
    day_index: usize,
    activity_id: &str,
) -> Vec<DayPlan> {
    itinerary
        .into_iter()
        .enumerate()
        .map(|(index, mut day)| {
            if index == day_index {
                day.activities.retain(|a| a.id != activity_id);
            }
            day
        })
        .collect()
}

pub fn removal_notice() -> Notice {
    Notice::new(
        "Activity Removed",
        "Activity has been removed from your itinerary",
    )
}

/// Editing is acknowledged only; the itinerary is never touched.
pub fn edit_notice(day_index: usize, activity_id: &str) -> Notice {
    tracing::debug!(day_index, activity_id, "edit requested");

    Notice::new("Edit Activity", "Edit functionality would open here")
}

pub fn share_notice() -> Notice {
    Notice::new("Itinerary Shared!", "Share link copied to clipboard")
}
