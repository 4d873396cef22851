//! Dashboard handler

use application::Dashboard;
use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::ApiError;
use crate::handlers::common::{ApiResponse, CityRequest, city_lookup_error};
use crate::state::AppState;

/// Current conditions and forecast in one response
///
/// POST /v1/dashboard
///
/// The two provider fetches behind this endpoint run concurrently.
#[instrument(skip(state), fields(city = %request.city))]
pub async fn dashboard(
    State(state): State<AppState>,
    Json(request): Json<CityRequest>,
) -> Result<Json<ApiResponse<Dashboard>>, ApiError> {
    let city = request.city_name()?;

    let dashboard = state
        .weather_service
        .dashboard(&city)
        .await
        .map_err(|e| city_lookup_error(e, "weather", &city))?;

    Ok(Json(ApiResponse::ok(dashboard)))
}
