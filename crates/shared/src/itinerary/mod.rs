use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Date;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Sightseeing,
    Dining,
    Activity,
    Transport,
    Accommodation,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display time, e.g. `9:00 AM`.
    pub time: String,
    /// Display duration, e.g. `2.5 hours`.
    pub duration: String,
    pub location: String,
    /// `$<amount>`
    pub cost: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_link: Option<String>,
    #[serde(rename = "type")]
    pub kind: ActivityType,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DayPlan {
    pub day: u32,
    pub date: Date,
    pub activities: Vec<Activity>,
}

impl DayPlan {
    pub fn contains(&self, activity_id: &str) -> bool {
        self.activities.iter().any(|a| a.id == activity_id)
    }
}
