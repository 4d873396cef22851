//! Current weather handler

use application::ports::CurrentConditions;
use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::ApiError;
use crate::handlers::common::{ApiResponse, CityRequest, city_lookup_error};
use crate::state::AppState;

/// Current conditions for a city
///
/// POST /v1/weather
#[instrument(skip(state), fields(city = %request.city))]
pub async fn current_weather(
    State(state): State<AppState>,
    Json(request): Json<CityRequest>,
) -> Result<Json<ApiResponse<CurrentConditions>>, ApiError> {
    let city = request.city_name()?;

    let current = state
        .weather_service
        .current(&city)
        .await
        .map_err(|e| city_lookup_error(e, "weather", &city))?;

    Ok(Json(ApiResponse::ok(current)))
}
