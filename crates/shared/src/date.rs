use time::{
    Date, Duration, OffsetDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Current calendar date in the local timezone, UTC when the offset can't be determined.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Adds whole calendar days, clamping at `Date::MAX`.
pub fn add_days(date: Date, days: u32) -> Date {
    date.saturating_add(Duration::days(i64::from(days)))
}

/// Calendar string used when a day is shown to a traveller, e.g. `10/19/2026`.
pub fn display_date(date: Date) -> String {
    format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
}

pub fn parse_iso_date(value: &str) -> crate::Result<Date> {
    Ok(Date::parse(value.trim(), ISO_DATE)?)
}
