//! Compliance domain models: completed audits and target progress.

use crate::models::ScopeKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal shape of a completed audit needed to evaluate a target.
///
/// Richer audit fields (form answers, signatures, attachments) belong to
/// the record store and never reach this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedAudit {
    pub scope: ScopeKey,
    pub completed_at: DateTime<Utc>,
}

impl CompletedAudit {
    pub fn new(scope: ScopeKey, completed_at: DateTime<Utc>) -> Self {
        Self {
            scope,
            completed_at,
        }
    }
}

/// Progress tier for a target window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// The target quantity has been reached.
    Fulfilled,
    /// At least 80% of the target quantity is done.
    OnTrack,
    /// Below 80% of the target quantity.
    Pending,
}

impl ComplianceStatus {
    /// Tier for a capped completion percentage.
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage >= 100 {
            ComplianceStatus::Fulfilled
        } else if percentage >= 80 {
            ComplianceStatus::OnTrack
        } else {
            ComplianceStatus::Pending
        }
    }

    /// Converts to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Fulfilled => "fulfilled",
            ComplianceStatus::OnTrack => "on_track",
            ComplianceStatus::Pending => "pending",
        }
    }
}

/// Result of measuring completed audits against a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    /// Required quantity from the target.
    pub target: u32,
    /// Matching completed audits inside the window.
    pub completed: u32,
    /// Audits still missing; zero when over-completed.
    pub shortfall: u32,
    /// Completion percentage, capped at 100.
    pub percentage: u8,
    pub status: ComplianceStatus,
    /// Resolved window bounds, inclusive.
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
}
