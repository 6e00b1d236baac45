//! Scheduling route handlers: day distribution, recurrence expansion,
//! and recurring-frequency suggestions.

use axum::{extract::State, response::IntoResponse, Json};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{DistributionRequest, RecurrenceRequest, ScheduledDay, Target};
use domain::services::{day_distribution, recurrence, suggestions, FrequencySuggestion};

/// Response for a proposed distribution.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResponse {
    pub days: Vec<ScheduledDay>,
    pub total: usize,
}

/// Response for expanded recurrence occurrences.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrencesResponse {
    pub dates: Vec<NaiveDate>,
    pub total: usize,
}

/// Response for recurring-frequency suggestions.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsResponse {
    pub suggestions: Vec<FrequencySuggestion>,
    pub total: usize,
}

/// Propose audit days spread across a period.
///
/// POST /api/v1/schedule/distribution
pub async fn propose_distribution(
    State(state): State<AppState>,
    Json(payload): Json<DistributionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let max_quantity = state.config.limits.max_quantity;
    if payload.quantity > max_quantity {
        return Err(ApiError::LimitExceeded(format!(
            "quantity {} exceeds the maximum of {}",
            payload.quantity, max_quantity
        )));
    }

    let days = day_distribution::distribute(&payload)?;
    info!(
        quantity = payload.quantity,
        period = payload.period.as_str(),
        "proposed audit distribution"
    );

    Ok(Json(DistributionResponse {
        total: days.len(),
        days,
    }))
}

/// Expand a recurrence rule into concrete occurrence dates.
///
/// POST /api/v1/schedule/occurrences
pub async fn expand_occurrences(
    State(state): State<AppState>,
    Json(payload): Json<RecurrenceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let max_occurrences = state.config.limits.max_occurrences;
    if payload.count > max_occurrences {
        return Err(ApiError::LimitExceeded(format!(
            "count {} exceeds the maximum of {}",
            payload.count, max_occurrences
        )));
    }

    let dates = recurrence::next_occurrences(&payload)?;
    info!(
        count = payload.count,
        produced = dates.len(),
        "expanded recurrence"
    );

    Ok(Json(OccurrencesResponse {
        total: dates.len(),
        dates,
    }))
}

/// Suggest recurring frequencies that would fulfill a target.
///
/// POST /api/v1/schedule/suggestions
pub async fn suggest_recurring(
    State(_state): State<AppState>,
    Json(payload): Json<Target>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let suggestions = suggestions::suggest_frequencies(&payload)?;
    info!(
        period = payload.period.as_str(),
        quantity = payload.quantity,
        suggested = suggestions.len(),
        "computed recurring suggestions"
    );

    Ok(Json(SuggestionsResponse {
        total: suggestions.len(),
        suggestions,
    }))
}
