//! Compliance route handlers.

use axum::{extract::State, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{CompletedAudit, Target};
use domain::services::compliance;

/// Request to evaluate completed audits against a target.
///
/// The caller supplies the records it already holds; this service never
/// queries storage. `now` pins the evaluation instant for weekly windows
/// and defaults to the server clock when omitted.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateComplianceRequest {
    #[validate(nested)]
    pub target: Target,

    #[serde(default)]
    pub records: Vec<CompletedAudit>,

    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// Evaluate a target against the supplied completed audits.
///
/// POST /api/v1/compliance/evaluation
pub async fn evaluate_target(
    State(state): State<AppState>,
    Json(payload): Json<EvaluateComplianceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let max_records = state.config.limits.max_records;
    if payload.records.len() > max_records {
        return Err(ApiError::LimitExceeded(format!(
            "{} records exceed the maximum of {}",
            payload.records.len(),
            max_records
        )));
    }

    let now = payload.now.unwrap_or_else(Utc::now);
    let report = compliance::evaluate(&payload.target, &payload.records, now)?;
    info!(
        scope = %payload.target.scope,
        completed = report.completed,
        target = report.target,
        status = report.status.as_str(),
        "evaluated target compliance"
    );

    Ok(Json(report))
}
