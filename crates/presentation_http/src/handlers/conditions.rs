//! Condition description handler

use application::StyledCondition;
use axum::{Json, extract::State};
use domain::value_objects::TimeOfDay;
use serde::Deserialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::handlers::common::ApiResponse;
use crate::state::AppState;

/// Request body for the condition description endpoint
#[derive(Debug, Deserialize)]
pub struct DescribeConditionRequest {
    /// Condition label to phrase, e.g. "Rain"
    pub condition: String,
    /// Part of the day, e.g. "evening"
    pub time_of_day: String,
}

/// Friendly condition description and icon from the language model
///
/// POST /v1/conditions/describe
#[instrument(skip(state), fields(time_of_day = %request.time_of_day))]
pub async fn describe_condition(
    State(state): State<AppState>,
    Json(request): Json<DescribeConditionRequest>,
) -> Result<Json<ApiResponse<StyledCondition>>, ApiError> {
    let time_of_day: TimeOfDay = request
        .time_of_day
        .parse()
        .map_err(|e: domain::value_objects::InvalidTimeOfDay| ApiError::BadRequest(e.to_string()))?;

    let styled = state
        .condition_stylist
        .stylize(&request.condition, time_of_day)
        .await?;

    Ok(Json(ApiResponse::ok(styled)))
}
