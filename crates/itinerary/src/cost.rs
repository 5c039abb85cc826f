use serde::Serialize;
use tripcraft_shared::{CostParseError, CostParseReason, itinerary::DayPlan};

/// Parses a display cost such as `$35` into its numeric amount.
///
/// A leading `$` is optional. Anything that is not a finite, non-negative
/// number is rejected rather than counted as zero.
pub fn parse_cost(value: &str) -> Result<f64, CostParseError> {
    let amount = value.trim();
    let amount = amount.strip_prefix('$').unwrap_or(amount).trim();

    if amount.is_empty() {
        return Err(CostParseError::new(value, CostParseReason::Empty));
    }

    let parsed = amount
        .parse::<f64>()
        .map_err(|_| CostParseError::new(value, CostParseReason::NotANumber))?;

    if !parsed.is_finite() {
        return Err(CostParseError::new(value, CostParseReason::NotFinite));
    }

    if parsed.is_sign_negative() && parsed != 0.0 {
        return Err(CostParseError::new(value, CostParseReason::Negative));
    }

    Ok(parsed)
}

/// Sum of every remaining activity cost across all days.
///
/// Always recomputed from `itinerary` so removals are reflected immediately.
pub fn total_cost(itinerary: &[DayPlan]) -> tripcraft_shared::Result<f64> {
    let mut total = 0.0;

    for day in itinerary {
        for activity in &day.activities {
            total += parse_cost(&activity.cost).inspect_err(|err| {
                tracing::warn!(day = day.day, activity = %activity.id, "{err}");
            })?;
        }
    }

    Ok(total)
}

/// Headline numbers shown above an itinerary.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_days: usize,
    pub activity_count: usize,
    pub estimated_cost: f64,
}

impl Summary {
    pub fn of(itinerary: &[DayPlan]) -> tripcraft_shared::Result<Self> {
        Ok(Self {
            total_days: itinerary.len(),
            activity_count: itinerary.iter().map(|d| d.activities.len()).sum(),
            estimated_cost: total_cost(itinerary)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dollar_amounts() {
        assert_eq!(parse_cost("$35"), Ok(35.0));
        assert_eq!(parse_cost("$0"), Ok(0.0));
        assert_eq!(parse_cost("120"), Ok(120.0));
        assert_eq!(parse_cost(" $12.50 "), Ok(12.5));
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert_eq!(parse_cost("$").unwrap_err().reason, CostParseReason::Empty);
        assert_eq!(parse_cost("").unwrap_err().reason, CostParseReason::Empty);
        assert_eq!(
            parse_cost("free").unwrap_err().reason,
            CostParseReason::NotANumber
        );
        assert_eq!(
            parse_cost("$35 per person").unwrap_err().reason,
            CostParseReason::NotANumber
        );
        assert_eq!(
            parse_cost("$inf").unwrap_err().reason,
            CostParseReason::NotFinite
        );
        assert_eq!(
            parse_cost("$-5").unwrap_err().reason,
            CostParseReason::Negative
        );
    }

    #[test]
    fn error_keeps_original_value() {
        let err = parse_cost("€20").unwrap_err();
        assert_eq!(err.value, "€20");
        assert_eq!(err.to_string(), "invalid cost '€20': not a number");
    }
}
