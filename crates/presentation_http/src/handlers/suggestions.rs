//! City suggestion handler

use application::ports::CitySuggestion;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::instrument;

use crate::error::ApiError;
use crate::handlers::common::ApiResponse;
use crate::state::AppState;

/// Query parameters for the suggestions endpoint
#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    /// Free-form city query
    pub q: Option<String>,
}

/// City-name autocomplete
///
/// GET /v1/suggestions?q=...
#[instrument(skip(state))]
pub async fn suggest_cities(
    State(state): State<AppState>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<ApiResponse<Vec<CitySuggestion>>>, ApiError> {
    let query = params
        .q
        .ok_or_else(|| ApiError::BadRequest("Query is required".to_string()))?;

    let suggestions = state.suggestion_service.suggest(&query).await?;

    Ok(Json(ApiResponse::ok(suggestions)))
}
