//! Recurring schedule domain model.

use crate::models::schedule::weekday_set;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

fn default_interval() -> u32 {
    1
}

/// Frequency rule for auto-generated audit occurrences.
///
/// Exactly one variant is populated; the tag makes illegal field
/// combinations unrepresentable on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Frequency {
    /// Fires on the given weekdays every `interval_weeks` weeks.
    #[serde(rename_all = "camelCase")]
    Weekly {
        #[serde(with = "weekday_set")]
        weekdays: HashSet<Weekday>,
        #[serde(default = "default_interval")]
        interval_weeks: u32,
    },
    /// Fires on `day_of_month` every `interval_months` months, clamped
    /// to the last day of shorter months.
    #[serde(rename_all = "camelCase")]
    Monthly {
        day_of_month: u32,
        #[serde(default = "default_interval")]
        interval_months: u32,
    },
}

impl Frequency {
    /// A weekly rule firing every week on the given days.
    pub fn weekly(weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        Frequency::Weekly {
            weekdays: weekdays.into_iter().collect(),
            interval_weeks: 1,
        }
    }

    /// A monthly rule firing every month on the given day.
    pub fn monthly(day_of_month: u32) -> Self {
        Frequency::Monthly {
            day_of_month,
            interval_months: 1,
        }
    }
}

fn default_count() -> u32 {
    10
}

/// Request to expand a frequency rule into concrete occurrence dates.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRequest {
    pub frequency: Frequency,

    pub start_date: NaiveDate,

    /// No occurrence is ever produced past this date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Maximum number of occurrence dates to return.
    #[serde(default = "default_count")]
    #[validate(range(min = 1, message = "Count must be at least 1"))]
    pub count: u32,
}
