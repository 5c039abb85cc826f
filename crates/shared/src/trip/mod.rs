use std::{collections::BTreeSet, convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

/// Suggested interest labels offered by the planning form.
pub const INTEREST_OPTIONS: [&str; 12] = [
    "Adventure Sports",
    "Cultural Sites",
    "Museums",
    "Food & Dining",
    "Nightlife",
    "Shopping",
    "Nature & Hiking",
    "Beaches",
    "Photography",
    "Local Markets",
    "Historical Sites",
    "Art Galleries",
];

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
pub enum AgeRange {
    #[strum(serialize = "18-25")]
    #[serde(rename = "18-25")]
    From18To25,
    #[strum(serialize = "26-35")]
    #[serde(rename = "26-35")]
    From26To35,
    #[strum(serialize = "36-50")]
    #[serde(rename = "36-50")]
    From36To50,
    #[strum(serialize = "51-65")]
    #[serde(rename = "51-65")]
    From51To65,
    #[strum(serialize = "65+")]
    #[serde(rename = "65+")]
    Over65,
    #[strum(serialize = "mixed")]
    #[serde(rename = "mixed")]
    Mixed,
}

impl AgeRange {
    pub fn label(&self) -> &'static str {
        match self {
            AgeRange::From18To25 => "18-25",
            AgeRange::From26To35 => "26-35",
            AgeRange::From36To50 => "36-50",
            AgeRange::From51To65 => "51-65",
            AgeRange::Over65 => "65+",
            AgeRange::Mixed => "Mixed Ages",
        }
    }
}

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
pub enum GroupSize {
    Solo,
    Couple,
    Small,
    Large,
}

impl GroupSize {
    pub fn label(&self) -> &'static str {
        match self {
            GroupSize::Solo => "Solo (1)",
            GroupSize::Couple => "Couple (2)",
            GroupSize::Small => "Small Group (3-6)",
            GroupSize::Large => "Large Group (7+)",
        }
    }
}

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
pub enum TripDuration {
    #[strum(serialize = "1-2")]
    #[serde(rename = "1-2")]
    OneToTwoDays,
    #[strum(serialize = "3-5")]
    #[serde(rename = "3-5")]
    ThreeToFiveDays,
    #[strum(serialize = "1-week")]
    #[serde(rename = "1-week")]
    OneWeek,
    #[strum(serialize = "2-weeks")]
    #[serde(rename = "2-weeks")]
    TwoWeeks,
    #[strum(serialize = "3-weeks")]
    #[serde(rename = "3-weeks")]
    ThreeWeeks,
    #[strum(serialize = "1-month")]
    #[serde(rename = "1-month")]
    OneMonth,
}

impl TripDuration {
    pub fn label(&self) -> &'static str {
        match self {
            TripDuration::OneToTwoDays => "1-2 days",
            TripDuration::ThreeToFiveDays => "3-5 days",
            TripDuration::OneWeek => "1 week",
            TripDuration::TwoWeeks => "2 weeks",
            TripDuration::ThreeWeeks => "3 weeks",
            TripDuration::OneMonth => "1 month+",
        }
    }
}

/// The trip length picked in the form.
///
/// Values outside [`TripDuration`] are kept as typed so that they still count
/// as a chosen duration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationChoice {
    Known(TripDuration),
    Other(String),
}

impl DurationChoice {
    pub fn known(&self) -> Option<TripDuration> {
        match self {
            DurationChoice::Known(duration) => Some(*duration),
            DurationChoice::Other(_) => None,
        }
    }
}

impl From<TripDuration> for DurationChoice {
    fn from(value: TripDuration) -> Self {
        Self::Known(value)
    }
}

impl FromStr for DurationChoice {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TripDuration::from_str(s)
            .map(Self::Known)
            .unwrap_or_else(|_| Self::Other(s.to_owned())))
    }
}

impl fmt::Display for DurationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationChoice::Known(duration) => fmt::Display::fmt(duration, f),
            DurationChoice::Other(raw) => f.write_str(raw),
        }
    }
}

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
pub enum Mobility {
    High,
    Moderate,
    Low,
    Wheelchair,
}

impl Mobility {
    pub fn label(&self) -> &'static str {
        match self {
            Mobility::High => "High mobility - lots of walking/hiking",
            Mobility::Moderate => "Moderate mobility - some walking",
            Mobility::Low => "Low mobility - minimal walking",
            Mobility::Wheelchair => "Wheelchair accessible required",
        }
    }
}

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
pub enum Budget {
    Budget,
    Mid,
    Luxury,
    Ultra,
}

impl Budget {
    pub fn label(&self) -> &'static str {
        match self {
            Budget::Budget => "Budget ($0-$50/day)",
            Budget::Mid => "Mid-range ($51-$150/day)",
            Budget::Luxury => "Luxury ($151-$300/day)",
            Budget::Ultra => "Ultra-luxury ($300+/day)",
        }
    }
}

/// Everything a traveller told the planning form.
///
/// Only `location` and `duration` gate submission, every other field may stay
/// empty and is carried through untouched.
#[derive(Validate, Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripPreferences {
    pub age_range: Option<AgeRange>,
    pub group_size: Option<GroupSize>,
    #[validate(length(min = 1, message = "Destination is required"))]
    pub location: String,
    #[validate(required(message = "Trip duration is required"))]
    pub duration: Option<DurationChoice>,
    #[serde(default)]
    pub interests: BTreeSet<String>,
    pub mobility: Option<Mobility>,
    pub budget: Option<Budget>,
    #[serde(default)]
    pub additional_notes: String,
}

impl TripPreferences {
    pub fn is_submittable(&self) -> bool {
        !self.location.is_empty() && self.duration.is_some()
    }
}
