//! Domain error types.

use thiserror::Error;

/// Rejection raised when a scheduling or compliance request is malformed.
///
/// Every service validates its input before computing anything, so a
/// returned error means no partial result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    #[error("month is required for a monthly period")]
    MissingMonth,

    #[error("month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),

    #[error("day of month must be between 1 and 31, got {0}")]
    DayOfMonthOutOfRange(u32),

    #[error("weekly recurrence requires at least one weekday")]
    EmptyWeekdays,

    #[error("recurrence interval must be at least 1")]
    ZeroInterval,

    #[error("occurrence count must be at least 1")]
    ZeroCount,

    #[error("year must be between 1900 and 2100, got {0}")]
    YearOutOfRange(i32),
}
