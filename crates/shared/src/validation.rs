//! Common validation utilities.

use validator::ValidationError;

/// Earliest year the scheduling calendar accepts.
const MIN_YEAR: i32 = 1900;

/// Latest year the scheduling calendar accepts.
const MAX_YEAR: i32 = 2100;

/// Validates that a year falls inside the supported calendar range.
pub fn validate_year(year: i32) -> Result<(), ValidationError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        let mut err = ValidationError::new("year_range");
        err.message = Some("Year must be between 1900 and 2100".into());
        Err(err)
    }
}

/// Validates that a month number is within 1-12.
pub fn validate_month(month: u32) -> Result<(), ValidationError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        let mut err = ValidationError::new("month_range");
        err.message = Some("Month must be between 1 and 12".into());
        Err(err)
    }
}

/// Validates that a day-of-month is within 1-31.
///
/// Short months clamp at computation time; 31 is always accepted here.
pub fn validate_day_of_month(day: u32) -> Result<(), ValidationError> {
    if (1..=31).contains(&day) {
        Ok(())
    } else {
        let mut err = ValidationError::new("day_of_month_range");
        err.message = Some("Day of month must be between 1 and 31".into());
        Err(err)
    }
}

/// Validates that an ISO weekday number is within 1-7 (Monday = 1).
pub fn validate_weekday_number(weekday: u8) -> Result<(), ValidationError> {
    if (1..=7).contains(&weekday) {
        Ok(())
    } else {
        let mut err = ValidationError::new("weekday_range");
        err.message = Some("Weekday must be between 1 and 7".into());
        Err(err)
    }
}
