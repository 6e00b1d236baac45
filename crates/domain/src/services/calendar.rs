//! Small calendar helpers shared by the scheduling services.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Date for `(year, month, day)` with the day clamped into the month,
/// so day 31 lands on the last day of shorter months.
///
/// `None` only when the year is outside chrono's calendar range.
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day.min(days_in_month(year, month)))
}

/// Inclusive UTC bounds spanning `first` 00:00:00 through `last` 23:59:59.
pub fn day_bounds(first: NaiveDate, last: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = first.and_time(NaiveTime::MIN).and_utc();
    let end = last.and_time(NaiveTime::MIN).and_utc() + Duration::seconds(86_399);
    (start, end)
}
