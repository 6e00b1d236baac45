//! Domain services for the Audit Scheduler.
//!
//! Services contain the pure scheduling logic that operates on domain
//! models. None of them performs I/O or reads a clock; callers supply
//! every input, including the evaluation instant for compliance.

pub mod calendar;
pub mod compliance;
pub mod day_distribution;
pub mod recurrence;
pub mod suggestions;

pub use compliance::evaluate;
pub use day_distribution::distribute;
pub use recurrence::next_occurrences;
pub use suggestions::{suggest_frequencies, FrequencySuggestion, SuggestionKind};
