use time::{
    Date, Duration, OffsetDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};
use time_tz::{ToTimezone, timezones};

/// `YYYY-MM-DD`, the only date form stored and accepted.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar day of `reference` as seen in the time zone `tz`.
///
/// Unknown zone names fall back to the offset already carried by `reference`.
pub fn local_date(reference: OffsetDateTime, tz: &str) -> Date {
    match timezones::get_by_name(tz) {
        Some(tz) => reference.to_timezone(tz).date(),
        None => reference.date(),
    }
}

pub fn is_known_timezone(tz: &str) -> bool {
    timezones::get_by_name(tz).is_some()
}

pub fn parse_date(value: &str) -> crate::Result<Date> {
    Ok(Date::parse(value.trim(), DATE_FORMAT)?)
}

pub fn format_date(date: Date) -> crate::Result<String> {
    Ok(date.format(DATE_FORMAT)?)
}

/// Integer key identifying a calendar day, used for all day comparisons.
pub fn day_key(date: Date) -> i32 {
    date.to_julian_day()
}

/// `None` when the result falls outside the representable calendar.
pub fn add_days(date: Date, days: i64) -> Option<Date> {
    date.checked_add(Duration::days(days))
}
