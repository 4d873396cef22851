//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Dashboard API (v1)
        .route("/v1/weather", post(handlers::weather::current_weather))
        .route("/v1/forecast", post(handlers::forecast::five_day_forecast))
        .route("/v1/dashboard", post(handlers::dashboard::dashboard))
        .route("/v1/suggestions", get(handlers::suggestions::suggest_cities))
        .route(
            "/v1/conditions/describe",
            post(handlers::conditions::describe_condition),
        )
        // Attach state
        .with_state(state)
}
