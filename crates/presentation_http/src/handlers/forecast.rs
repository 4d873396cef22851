//! Forecast handler

use axum::{Json, extract::State};
use domain::DailySummary;
use tracing::instrument;

use crate::error::ApiError;
use crate::handlers::common::{ApiResponse, CityRequest, city_lookup_error};
use crate::state::AppState;

/// Aggregated 5-day forecast for a city
///
/// POST /v1/forecast
#[instrument(skip(state), fields(city = %request.city))]
pub async fn five_day_forecast(
    State(state): State<AppState>,
    Json(request): Json<CityRequest>,
) -> Result<Json<ApiResponse<Vec<DailySummary>>>, ApiError> {
    let city = request.city_name()?;

    let forecast = state
        .weather_service
        .forecast(&city)
        .await
        .map_err(|e| city_lookup_error(e, "forecast", &city))?;

    Ok(Json(ApiResponse::ok(forecast)))
}
