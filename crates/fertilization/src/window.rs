use pupuk_shared::{add_days, day_key, local_date};
use time::{Date, OffsetDateTime};

/// Number of days, ending today, summed into the trailing actual total.
pub const TRAILING_DAYS: i64 = 5;

/// Day keys a report is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    today: Date,
    today_key: i32,
    tomorrow_key: Option<i32>,
    trailing_start_key: i32,
}

impl ReportWindow {
    pub fn new(today: Date) -> Self {
        Self {
            today,
            today_key: day_key(today),
            tomorrow_key: add_days(today, 1).map(day_key),
            trailing_start_key: add_days(today, 1 - TRAILING_DAYS)
                .map_or(day_key(Date::MIN), day_key),
        }
    }

    /// Window for the calendar day `reference` falls on in the time zone `tz`.
    pub fn from_reference(reference: OffsetDateTime, tz: &str) -> Self {
        Self::new(local_date(reference, tz))
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn is_today(&self, date: Option<Date>) -> bool {
        date.is_some_and(|d| day_key(d) == self.today_key)
    }

    pub fn is_tomorrow(&self, date: Option<Date>) -> bool {
        date.is_some_and(|d| Some(day_key(d)) == self.tomorrow_key)
    }

    /// `true` for dates in `[today - 4, today]`, both ends included.
    pub fn is_trailing(&self, date: Option<Date>) -> bool {
        date.is_some_and(|d| {
            let key = day_key(d);
            key >= self.trailing_start_key && key <= self.today_key
        })
    }
}
