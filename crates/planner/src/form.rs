use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString, VariantArray};
use tripcraft_shared::trip::{
    AgeRange, Budget, DurationChoice, GroupSize, Mobility, TripPreferences,
};
use validator::Validate;

#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "camelCase")]
pub enum FormField {
    AgeRange,
    GroupSize,
    Location,
    Duration,
    Mobility,
    Budget,
    AdditionalNotes,
}

/// A single field edit. Interests are toggled separately, see [`toggle_interest`].
#[derive(Clone, Debug, PartialEq)]
pub enum FormUpdate {
    AgeRange(Option<AgeRange>),
    GroupSize(Option<GroupSize>),
    Location(String),
    Duration(Option<DurationChoice>),
    Mobility(Option<Mobility>),
    Budget(Option<Budget>),
    AdditionalNotes(String),
}

impl FormUpdate {
    /// Builds an update from the raw value a form control produced.
    ///
    /// Select values that don't name a known option clear the field instead
    /// of failing, except for the duration which keeps whatever was typed.
    pub fn from_raw(field: FormField, value: &str) -> Self {
        match field {
            FormField::AgeRange => Self::AgeRange(parse_option(field, value)),
            FormField::GroupSize => Self::GroupSize(parse_option(field, value)),
            FormField::Location => Self::Location(value.to_owned()),
            FormField::Duration => Self::Duration(parse_duration(value)),
            FormField::Mobility => Self::Mobility(parse_option(field, value)),
            FormField::Budget => Self::Budget(parse_option(field, value)),
            FormField::AdditionalNotes => Self::AdditionalNotes(value.to_owned()),
        }
    }

    pub fn field(&self) -> FormField {
        match self {
            Self::AgeRange(_) => FormField::AgeRange,
            Self::GroupSize(_) => FormField::GroupSize,
            Self::Location(_) => FormField::Location,
            Self::Duration(_) => FormField::Duration,
            Self::Mobility(_) => FormField::Mobility,
            Self::Budget(_) => FormField::Budget,
            Self::AdditionalNotes(_) => FormField::AdditionalNotes,
        }
    }
}

fn parse_option<T: FromStr>(field: FormField, value: &str) -> Option<T> {
    if value.is_empty() {
        return None;
    }

    match T::from_str(value) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!(%field, value, "unknown option, leaving field unset");
            None
        }
    }
}

fn parse_duration(value: &str) -> Option<DurationChoice> {
    if value.is_empty() {
        return None;
    }

    let choice = DurationChoice::from_str(value).ok()?;
    if choice.known().is_none() {
        tracing::warn!(value, "unrecognized duration, itinerary will use the default length");
    }

    Some(choice)
}

/// Replaces exactly one field, keeping everything else.
pub fn apply(mut preferences: TripPreferences, update: FormUpdate) -> TripPreferences {
    match update {
        FormUpdate::AgeRange(value) => preferences.age_range = value,
        FormUpdate::GroupSize(value) => preferences.group_size = value,
        FormUpdate::Location(value) => preferences.location = value,
        FormUpdate::Duration(value) => preferences.duration = value,
        FormUpdate::Mobility(value) => preferences.mobility = value,
        FormUpdate::Budget(value) => preferences.budget = value,
        FormUpdate::AdditionalNotes(value) => preferences.additional_notes = value,
    }

    preferences
}

pub fn toggle_interest(
    mut preferences: TripPreferences,
    label: impl Into<String>,
    checked: bool,
) -> TripPreferences {
    let label = label.into();

    if checked {
        preferences.interests.insert(label);
    } else {
        preferences.interests.remove(&label);
    }

    preferences
}

/// Whether the create action is enabled.
pub fn can_submit(preferences: &TripPreferences) -> bool {
    preferences.is_submittable()
}

pub fn validate_submission(preferences: &TripPreferences) -> tripcraft_shared::Result<()> {
    preferences.validate()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use tripcraft_shared::trip::TripDuration;

    use super::*;

    #[test]
    fn raw_values_parse_into_options() {
        assert_eq!(
            FormUpdate::from_raw(FormField::Duration, "3-5"),
            FormUpdate::Duration(Some(DurationChoice::Known(TripDuration::ThreeToFiveDays)))
        );
        assert_eq!(
            FormUpdate::from_raw(FormField::Duration, "weekend"),
            FormUpdate::Duration(Some(DurationChoice::Other("weekend".to_owned())))
        );
        assert_eq!(
            FormUpdate::from_raw(FormField::Duration, ""),
            FormUpdate::Duration(None)
        );
        assert_eq!(
            FormUpdate::from_raw(FormField::Mobility, "wheelchair"),
            FormUpdate::Mobility(Some(Mobility::Wheelchair))
        );
        assert_eq!(
            FormUpdate::from_raw(FormField::Budget, "priceless"),
            FormUpdate::Budget(None)
        );
        assert_eq!(
            FormUpdate::from_raw(FormField::AgeRange, ""),
            FormUpdate::AgeRange(None)
        );
    }

    #[test]
    fn field_names_match_form_keys() {
        assert_eq!(FormField::from_str("groupSize").unwrap(), FormField::GroupSize);
        assert_eq!(FormField::AdditionalNotes.to_string(), "additionalNotes");
        for field in FormField::VARIANTS {
            assert_eq!(FormUpdate::from_raw(*field, "").field(), *field);
        }
    }

    #[test]
    fn validation_errors_name_the_fields() {
        let err = validate_submission(&TripPreferences::default()).unwrap_err();
        let tripcraft_shared::Error::Validate(errors) = err else {
            panic!("expected validation errors");
        };

        let fields = errors.field_errors();
        assert!(fields.contains_key("location"));
        assert!(fields.contains_key("duration"));
    }
}
