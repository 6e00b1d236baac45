//! Recurring-frequency suggestions derived from a target.
//!
//! Proposes up to four frequency presets that would approximately fulfill
//! a target, so callers can turn a one-off objective into a recurring
//! schedule without hand-picking days.

use crate::error::ScheduleError;
use crate::models::{Frequency, Period, Target};
use crate::services::calendar;
use chrono::Weekday;
use serde::Serialize;
use std::collections::HashSet;

const MAX_SUGGESTIONS: usize = 4;

/// Identifies the shape of a suggested schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Same weekdays every week, spread over the whole month.
    WeeklyUniform,
    /// One audit roughly every N days.
    DayInterval,
    /// Monday and Friday of every week.
    WeekBookends,
    /// Every work day.
    WorkWeek,
    /// Fixed weekdays matching a weekly target's quantity.
    FixedDays,
    /// First-of-month cadence for annual targets.
    MonthlySpread,
}

/// A recurring-frequency preset derived from a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencySuggestion {
    pub kind: SuggestionKind,
    pub frequency: Frequency,
    /// Occurrences the preset would generate over the target window.
    pub estimated_total: u32,
}

/// Suggests up to four recurring frequencies for the target.
pub fn suggest_frequencies(target: &Target) -> Result<Vec<FrequencySuggestion>, ScheduleError> {
    if target.quantity == 0 {
        return Err(ScheduleError::ZeroQuantity);
    }
    if !(1900..=2100).contains(&target.year) {
        return Err(ScheduleError::YearOutOfRange(target.year));
    }

    let mut suggestions = match target.period {
        Period::Monthly => monthly_suggestions(target)?,
        Period::Weekly => weekly_suggestions(target.quantity),
        Period::Annual => annual_suggestions(target.quantity),
    };
    suggestions.truncate(MAX_SUGGESTIONS);
    Ok(suggestions)
}

fn monthly_suggestions(target: &Target) -> Result<Vec<FrequencySuggestion>, ScheduleError> {
    let month = target.month.ok_or(ScheduleError::MissingMonth)?;
    if !(1..=12).contains(&month) {
        return Err(ScheduleError::MonthOutOfRange(month));
    }

    let days_in_month = calendar::days_in_month(target.year, month);
    let weeks_in_month = days_in_month.div_ceil(7);
    let per_week = target.quantity.div_ceil(weeks_in_month);
    let mut suggestions = Vec::new();

    if (1..=5).contains(&per_week) {
        suggestions.push(FrequencySuggestion {
            kind: SuggestionKind::WeeklyUniform,
            frequency: Frequency::Weekly {
                weekdays: weekday_preset(per_week),
                interval_weeks: 1,
            },
            estimated_total: per_week * weeks_in_month,
        });
    }

    let gap_days = days_in_month / target.quantity;
    if (1..=14).contains(&gap_days) {
        suggestions.push(FrequencySuggestion {
            kind: SuggestionKind::DayInterval,
            frequency: Frequency::Weekly {
                weekdays: [Weekday::Mon].into_iter().collect(),
                interval_weeks: gap_days.div_ceil(7),
            },
            estimated_total: target.quantity,
        });
    }

    if target.quantity >= 8 {
        suggestions.push(FrequencySuggestion {
            kind: SuggestionKind::WeekBookends,
            frequency: Frequency::weekly([Weekday::Mon, Weekday::Fri]),
            estimated_total: 2 * weeks_in_month,
        });
    }

    if target.quantity >= 20 {
        suggestions.push(FrequencySuggestion {
            kind: SuggestionKind::WorkWeek,
            frequency: Frequency::weekly(weekday_preset(5)),
            estimated_total: 5 * weeks_in_month,
        });
    }

    Ok(suggestions)
}

fn weekly_suggestions(quantity: u32) -> Vec<FrequencySuggestion> {
    vec![FrequencySuggestion {
        kind: SuggestionKind::FixedDays,
        frequency: Frequency::Weekly {
            weekdays: weekday_preset(quantity.min(5)),
            interval_weeks: 1,
        },
        estimated_total: quantity,
    }]
}

fn annual_suggestions(quantity: u32) -> Vec<FrequencySuggestion> {
    let per_month = quantity.div_ceil(12);
    vec![FrequencySuggestion {
        kind: SuggestionKind::MonthlySpread,
        frequency: Frequency::monthly(1),
        estimated_total: per_month * 12,
    }]
}

/// Fixed weekday picks for one to five audits per week, spacing them
/// across the work week.
fn weekday_preset(per_week: u32) -> HashSet<Weekday> {
    let days: &[Weekday] = match per_week {
        1 => &[Weekday::Mon],
        2 => &[Weekday::Mon, Weekday::Thu],
        3 => &[Weekday::Mon, Weekday::Wed, Weekday::Fri],
        4 => &[Weekday::Mon, Weekday::Tue, Weekday::Thu, Weekday::Fri],
        _ => &[
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ],
    };
    days.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScopeKey;
    use uuid::Uuid;

    fn target(period: Period, quantity: u32, month: Option<u32>) -> Target {
        Target {
            period,
            quantity,
            year: 2024,
            month,
            scope: ScopeKey::company(Uuid::new_v4()),
            active: true,
        }
    }

    fn find(
        suggestions: &[FrequencySuggestion],
        kind: SuggestionKind,
    ) -> Option<&FrequencySuggestion> {
        suggestions.iter().find(|s| s.kind == kind)
    }

    #[test]
    fn test_small_monthly_target_gets_weekly_uniform() {
        // 8 audits over March's 5 calendar weeks: 2 per week, Mon + Thu
        let suggestions = suggest_frequencies(&target(Period::Monthly, 8, Some(3))).unwrap();
        let uniform = find(&suggestions, SuggestionKind::WeeklyUniform).unwrap();
        match &uniform.frequency {
            Frequency::Weekly {
                weekdays,
                interval_weeks,
            } => {
                assert_eq!(*interval_weeks, 1);
                let expected: HashSet<Weekday> = [Weekday::Mon, Weekday::Thu].into_iter().collect();
                assert_eq!(weekdays, &expected);
            }
            other => panic!("expected weekly frequency, got {:?}", other),
        }
        assert_eq!(uniform.estimated_total, 10);
    }

    #[test]
    fn test_monthly_target_gets_day_interval() {
        // 31 / 4 = 7 days between audits, which fits in one-week intervals
        let suggestions = suggest_frequencies(&target(Period::Monthly, 4, Some(3))).unwrap();
        let interval = find(&suggestions, SuggestionKind::DayInterval).unwrap();
        assert_eq!(
            interval.frequency,
            Frequency::Weekly {
                weekdays: [Weekday::Mon].into_iter().collect(),
                interval_weeks: 1,
            }
        );
        assert_eq!(interval.estimated_total, 4);
    }

    #[test]
    fn test_bookends_appear_from_eight_audits() {
        let few = suggest_frequencies(&target(Period::Monthly, 7, Some(3))).unwrap();
        assert!(find(&few, SuggestionKind::WeekBookends).is_none());

        let enough = suggest_frequencies(&target(Period::Monthly, 8, Some(3))).unwrap();
        assert!(find(&enough, SuggestionKind::WeekBookends).is_some());
    }

    #[test]
    fn test_work_week_appears_from_twenty_audits() {
        let suggestions = suggest_frequencies(&target(Period::Monthly, 20, Some(3))).unwrap();
        let work_week = find(&suggestions, SuggestionKind::WorkWeek).unwrap();
        match &work_week.frequency {
            Frequency::Weekly { weekdays, .. } => assert_eq!(weekdays.len(), 5),
            other => panic!("expected weekly frequency, got {:?}", other),
        }
    }

    #[test]
    fn test_at_most_four_suggestions() {
        let suggestions = suggest_frequencies(&target(Period::Monthly, 25, Some(3))).unwrap();
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        assert!(!suggestions.is_empty());
    }

    #[test]
    fn test_weekly_target_fixed_days_match_quantity() {
        let suggestions = suggest_frequencies(&target(Period::Weekly, 3, None)).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::FixedDays);
        match &suggestions[0].frequency {
            Frequency::Weekly { weekdays, .. } => {
                let expected: HashSet<Weekday> =
                    [Weekday::Mon, Weekday::Wed, Weekday::Fri].into_iter().collect();
                assert_eq!(weekdays, &expected);
            }
            other => panic!("expected weekly frequency, got {:?}", other),
        }
    }

    #[test]
    fn test_annual_target_monthly_spread() {
        let suggestions = suggest_frequencies(&target(Period::Annual, 24, None)).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, SuggestionKind::MonthlySpread);
        assert_eq!(suggestions[0].frequency, Frequency::monthly(1));
        assert_eq!(suggestions[0].estimated_total, 24);
    }

    #[test]
    fn test_rejects_zero_quantity() {
        let result = suggest_frequencies(&target(Period::Weekly, 0, None));
        assert_eq!(result, Err(ScheduleError::ZeroQuantity));
    }

    #[test]
    fn test_rejects_monthly_without_month() {
        let result = suggest_frequencies(&target(Period::Monthly, 5, None));
        assert_eq!(result, Err(ScheduleError::MissingMonth));
    }
}
