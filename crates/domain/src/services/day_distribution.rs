//! Day distribution service.
//!
//! Spreads a requested number of audit slots across the valid days of a
//! period, honoring weekday preferences and exclusions. Picks anchor to
//! the first and last valid day of the span instead of clustering at the
//! start.

use crate::error::ScheduleError;
use crate::models::{DayPreferences, DistributionRequest, Period, ScheduledDay};
use crate::services::calendar;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;
use tracing::debug;

const WORK_WEEK: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

const FULL_WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Proposes `quantity` audit slots spread evenly across the requested
/// period.
///
/// The result always contains exactly `quantity` entries in chronological
/// order. Weekly requests only fix weekdays; monthly and annual requests
/// resolve concrete dates. When the quantity exceeds the number of valid
/// days, days repeat rather than truncating the schedule.
pub fn distribute(request: &DistributionRequest) -> Result<Vec<ScheduledDay>, ScheduleError> {
    validate(request)?;

    let candidates = candidate_weekdays(&request.preferences);
    match request.period {
        Period::Weekly => Ok(distribute_weekly(request.quantity, &candidates)),
        Period::Monthly => {
            let month = request.month.ok_or(ScheduleError::MissingMonth)?;
            Ok(distribute_monthly(
                request.quantity,
                request.year,
                month,
                &candidates,
            ))
        }
        Period::Annual => Ok(distribute_annual(
            request.quantity,
            request.year,
            &candidates,
        )),
    }
}

fn validate(request: &DistributionRequest) -> Result<(), ScheduleError> {
    if request.quantity == 0 {
        return Err(ScheduleError::ZeroQuantity);
    }
    if !(1900..=2100).contains(&request.year) {
        return Err(ScheduleError::YearOutOfRange(request.year));
    }
    match (request.period, request.month) {
        (Period::Monthly, None) => Err(ScheduleError::MissingMonth),
        (_, Some(month)) if !(1..=12).contains(&month) => {
            Err(ScheduleError::MonthOutOfRange(month))
        }
        _ => Ok(()),
    }
}

/// Ordered weekday pool the distribution may draw from.
///
/// Preferred days come first (including weekend days the caller opted
/// into), then the rest of the work week. Excluded days are removed, and
/// exclusions degrade to advisory if they would empty the pool entirely.
fn candidate_weekdays(preferences: &DayPreferences) -> Vec<Weekday> {
    let mut pool: Vec<Weekday> = FULL_WEEK
        .into_iter()
        .filter(|day| preferences.preferred.contains(day))
        .chain(
            WORK_WEEK
                .into_iter()
                .filter(|day| !preferences.preferred.contains(day)),
        )
        .filter(|day| !preferences.excluded.contains(day))
        .collect();

    if pool.is_empty() {
        pool = FULL_WEEK
            .into_iter()
            .filter(|day| !preferences.excluded.contains(day))
            .collect();
    }
    if pool.is_empty() {
        debug!("weekday exclusions removed every candidate, ignoring them");
        pool = FULL_WEEK.to_vec();
    }
    pool
}

/// Weekly slots cycle through the candidate pool in priority order.
fn distribute_weekly(quantity: u32, candidates: &[Weekday]) -> Vec<ScheduledDay> {
    (0..quantity as usize)
        .map(|i| ScheduledDay::weekly(candidates[i % candidates.len()]))
        .collect()
}

fn distribute_monthly(
    quantity: u32,
    year: i32,
    month: u32,
    candidates: &[Weekday],
) -> Vec<ScheduledDay> {
    sample_days(&valid_days_in_month(year, month, candidates), quantity)
        .into_iter()
        .map(|date| ScheduledDay::on_date(date, false))
        .collect()
}

/// Annual distributions apportion `ceil(quantity / 12)` slots per month,
/// capped so the running total never exceeds the quantity, then spread
/// each month's share over its valid days.
fn distribute_annual(quantity: u32, year: i32, candidates: &[Weekday]) -> Vec<ScheduledDay> {
    let per_month = quantity.div_ceil(12);
    let mut slots = Vec::with_capacity(quantity as usize);
    let mut assigned = 0;

    for month in 1..=12 {
        if assigned == quantity {
            break;
        }
        let share = per_month.min(quantity - assigned);
        let picked = sample_days(&valid_days_in_month(year, month, candidates), share);
        slots.extend(
            picked
                .into_iter()
                .map(|date| ScheduledDay::on_date(date, true)),
        );
        assigned += share;
    }
    slots
}

/// Every day of the month whose weekday is in the candidate pool, in
/// ascending order. Never empty: the pool always holds at least one
/// weekday and every weekday occurs in every month.
fn valid_days_in_month(year: i32, month: u32, candidates: &[Weekday]) -> Vec<NaiveDate> {
    let allowed: HashSet<Weekday> = candidates.iter().copied().collect();
    (1..=calendar::days_in_month(year, month))
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .filter(|date| allowed.contains(&date.weekday()))
        .collect()
}

/// Picks `quantity` entries from `valid` by uniform index sampling,
/// repeating rounds over the pool when the quantity exceeds it. Output is
/// sorted; repeated days across rounds are intentional.
fn sample_days(valid: &[NaiveDate], quantity: u32) -> Vec<NaiveDate> {
    let mut picked = Vec::with_capacity(quantity as usize);
    let mut remaining = quantity;
    while remaining > 0 {
        let take = remaining.min(valid.len() as u32);
        for index in spread_indexes(valid.len(), take) {
            picked.push(valid[index]);
        }
        remaining -= take;
    }
    picked.sort_unstable();
    picked
}

/// Indexes spread across `0..len`: the first and last pick anchor to the
/// ends of the range, the rest land proportionally between them. A single
/// pick lands on the midpoint.
fn spread_indexes(len: usize, need: u32) -> Vec<usize> {
    if need == 1 {
        return vec![len / 2];
    }
    let last = (len - 1) as f64;
    let divisor = f64::from(need - 1);
    (0..need)
        .map(|i| ((f64::from(i) * last / divisor).round() as usize).min(len - 1))
        .collect()
}
