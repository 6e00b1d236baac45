//! Domain models for the Audit Scheduler.

pub mod compliance;
pub mod recurrence;
pub mod schedule;
pub mod target;

pub use compliance::{CompletedAudit, ComplianceReport, ComplianceStatus};
pub use recurrence::{Frequency, RecurrenceRequest};
pub use schedule::{
    weekday_from_number, weekday_number, DayPreferences, DistributionRequest, Period,
    ScheduledDay,
};
pub use target::{ScopeKey, Target};
