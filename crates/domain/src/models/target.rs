//! Audit target domain model.

use crate::models::Period;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

/// Identifies the organizational scope a target or audit applies to:
/// a company, optionally narrowed to one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeKey {
    pub company_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<Uuid>,
}

impl ScopeKey {
    /// A company-wide scope covering every branch.
    pub fn company(company_id: Uuid) -> Self {
        Self {
            company_id,
            branch_id: None,
        }
    }

    /// A scope narrowed to a single branch.
    pub fn branch(company_id: Uuid, branch_id: Uuid) -> Self {
        Self {
            company_id,
            branch_id: Some(branch_id),
        }
    }

    /// Whether an audit recorded under `other` counts toward this scope.
    ///
    /// A company-wide scope covers audits from any branch of that company;
    /// a branch scope only matches audits recorded for the same branch.
    pub fn covers(&self, other: &ScopeKey) -> bool {
        if self.company_id != other.company_id {
            return false;
        }
        match self.branch_id {
            Some(branch_id) => other.branch_id == Some(branch_id),
            None => true,
        }
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.branch_id {
            Some(branch_id) => write!(f, "{}/{}", self.company_id, branch_id),
            None => write!(f, "{}", self.company_id),
        }
    }
}

fn default_active() -> bool {
    true
}

/// A stored objective: how many audits a scope should complete in a window.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub period: Period,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,

    #[validate(custom(function = "shared::validation::validate_year"))]
    pub year: i32,

    /// Required when `period` is monthly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "shared::validation::validate_month"))]
    pub month: Option<u32>,

    pub scope: ScopeKey,

    /// Inactive targets are kept for history but not evaluated by callers.
    #[serde(default = "default_active")]
    pub active: bool,
}
