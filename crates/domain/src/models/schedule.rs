//! Scheduling period and weekday types shared by the planning services.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

/// Calendar granularity a target or distribution is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Weekly,
    Monthly,
    Annual,
}

impl Period {
    /// Converts to the wire/database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Annual => "annual",
        }
    }

    /// Parses from the wire/database string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "weekly" => Some(Period::Weekly),
            "monthly" => Some(Period::Monthly),
            "annual" => Some(Period::Annual),
            _ => None,
        }
    }
}

/// Parses an ISO weekday number (1 = Monday .. 7 = Sunday).
pub fn weekday_from_number(number: u8) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

/// ISO weekday number (1 = Monday .. 7 = Sunday).
pub fn weekday_number(weekday: Weekday) -> u8 {
    weekday.number_from_monday() as u8
}

/// Serde adapter mapping a single weekday to its ISO number on the wire.
pub mod weekday_num {
    use chrono::Weekday;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        super::weekday_number(*weekday).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Weekday, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = u8::deserialize(deserializer)?;
        super::weekday_from_number(number).ok_or_else(|| {
            D::Error::custom(format!("weekday must be between 1 and 7, got {}", number))
        })
    }
}

/// Serde adapter mapping weekday sets to sorted ISO numbers on the wire.
pub mod weekday_set {
    use chrono::Weekday;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashSet;

    pub fn serialize<S>(set: &HashSet<Weekday>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut numbers: Vec<u8> = set.iter().map(|d| super::weekday_number(*d)).collect();
        numbers.sort_unstable();
        numbers.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashSet<Weekday>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let numbers = Vec::<u8>::deserialize(deserializer)?;
        numbers
            .into_iter()
            .map(|number| {
                super::weekday_from_number(number).ok_or_else(|| {
                    D::Error::custom(format!(
                        "weekday must be between 1 and 7, got {}",
                        number
                    ))
                })
            })
            .collect()
    }
}

/// Weekday preferences applied when proposing audit days.
///
/// An excluded day always wins over a preferred one. With both sets empty
/// the candidate pool defaults to Monday through Friday.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPreferences {
    #[serde(default, with = "weekday_set")]
    pub preferred: HashSet<Weekday>,
    #[serde(default, with = "weekday_set")]
    pub excluded: HashSet<Weekday>,
}

impl DayPreferences {
    /// Preferences with preferred days only.
    pub fn preferring(days: impl IntoIterator<Item = Weekday>) -> Self {
        Self {
            preferred: days.into_iter().collect(),
            excluded: HashSet::new(),
        }
    }

    /// Preferences with excluded days only.
    pub fn excluding(days: impl IntoIterator<Item = Weekday>) -> Self {
        Self {
            preferred: HashSet::new(),
            excluded: days.into_iter().collect(),
        }
    }
}

/// Request to spread a number of audit slots across a period.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRequest {
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,

    pub period: Period,

    #[validate(custom(function = "shared::validation::validate_year"))]
    pub year: i32,

    /// Required when `period` is monthly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "shared::validation::validate_month"))]
    pub month: Option<u32>,

    #[serde(default)]
    pub preferences: DayPreferences,
}

/// One proposed audit slot inside a period.
///
/// Weekly distributions only choose a weekday; the caller anchors it
/// against a concrete week. Monthly and annual slots resolve a full date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledDay {
    #[serde(with = "weekday_num")]
    pub weekday: Weekday,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<u32>,

    /// Populated for annual distributions only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl ScheduledDay {
    /// A weekly slot: only the weekday is fixed.
    pub fn weekly(weekday: Weekday) -> Self {
        Self {
            weekday,
            day_of_month: None,
            month: None,
            date: None,
        }
    }

    /// A slot pinned to a concrete calendar date.
    pub fn on_date(date: NaiveDate, include_month: bool) -> Self {
        use chrono::Datelike;
        Self {
            weekday: date.weekday(),
            day_of_month: Some(date.day()),
            month: include_month.then(|| date.month()),
            date: Some(date),
        }
    }
}
