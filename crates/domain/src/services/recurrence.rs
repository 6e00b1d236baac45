//! Recurrence expansion service.
//!
//! Expands a frequency rule into concrete future occurrence dates. The
//! expansion is a pure function of its inputs: calling it twice with the
//! same request yields the same dates.

use crate::error::ScheduleError;
use crate::models::{Frequency, RecurrenceRequest};
use crate::services::calendar;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Expands the request into at most `count` occurrence dates.
///
/// Dates are strictly increasing, never before `start_date` and never
/// after `end_date` when one is supplied. An end date before the start
/// yields an empty list (nothing is available), not an error.
pub fn next_occurrences(request: &RecurrenceRequest) -> Result<Vec<NaiveDate>, ScheduleError> {
    validate(request)?;

    let dates = match &request.frequency {
        Frequency::Weekly {
            weekdays,
            interval_weeks,
        } => weekly_occurrences(
            weekdays,
            *interval_weeks,
            request.start_date,
            request.end_date,
            request.count,
        ),
        Frequency::Monthly {
            day_of_month,
            interval_months,
        } => monthly_occurrences(
            *day_of_month,
            *interval_months,
            request.start_date,
            request.end_date,
            request.count,
        ),
    };
    Ok(dates)
}

fn validate(request: &RecurrenceRequest) -> Result<(), ScheduleError> {
    if request.count == 0 {
        return Err(ScheduleError::ZeroCount);
    }
    match &request.frequency {
        Frequency::Weekly {
            weekdays,
            interval_weeks,
        } => {
            if weekdays.is_empty() {
                return Err(ScheduleError::EmptyWeekdays);
            }
            if *interval_weeks == 0 {
                return Err(ScheduleError::ZeroInterval);
            }
        }
        Frequency::Monthly {
            day_of_month,
            interval_months,
        } => {
            if !(1..=31).contains(day_of_month) {
                return Err(ScheduleError::DayOfMonthOutOfRange(*day_of_month));
            }
            if *interval_months == 0 {
                return Err(ScheduleError::ZeroInterval);
            }
        }
    }
    Ok(())
}

/// Walks forward day by day from `start`. A date qualifies when its
/// weekday is selected and its week is a whole multiple of the interval
/// away from the week of the first qualifying date.
fn weekly_occurrences(
    weekdays: &HashSet<Weekday>,
    interval_weeks: u32,
    start: NaiveDate,
    end: Option<NaiveDate>,
    count: u32,
) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(count as usize);
    let mut anchor_week: Option<NaiveDate> = None;
    let mut current = start;

    while (dates.len() as u32) < count {
        if let Some(end) = end {
            if current > end {
                break;
            }
        }
        if weekdays.contains(&current.weekday()) {
            let week = calendar::week_start(current);
            let anchor = *anchor_week.get_or_insert(week);
            let elapsed_weeks = (week - anchor).num_days() / 7;
            if elapsed_weeks % i64::from(interval_weeks) == 0 {
                dates.push(current);
            }
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Steps through candidate months from the anchor month (the month of
/// `start`, or the next one if the clamped day already passed), emitting
/// the clamped day-of-month for every `interval_months`-th month.
fn monthly_occurrences(
    day_of_month: u32,
    interval_months: u32,
    start: NaiveDate,
    end: Option<NaiveDate>,
    count: u32,
) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(count as usize);
    let mut anchor = month_index(start.year(), start.month());
    if let Some(first) = calendar::clamped_date(start.year(), start.month(), day_of_month) {
        if first < start {
            anchor += 1;
        }
    }

    let mut step: i64 = 0;
    while (dates.len() as u32) < count {
        let index = anchor + step * i64::from(interval_months);
        let year = index.div_euclid(12) as i32;
        let month = (index.rem_euclid(12) + 1) as u32;
        let date = match calendar::clamped_date(year, month, day_of_month) {
            Some(date) => date,
            None => break,
        };
        if let Some(end) = end {
            if date > end {
                break;
            }
        }
        dates.push(date);
        step += 1;
    }
    dates
}

fn month_index(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month) - 1
}
