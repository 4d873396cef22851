//! Application state shared across handlers

use std::sync::Arc;

use application::{ConditionStylist, SuggestionService, WeatherService};
use infrastructure::AppConfig;

/// Shared application state
///
/// All services sit behind `Arc`s so handlers stay testable with mocked
/// ports.
#[derive(Clone)]
pub struct AppState {
    /// Weather service for current conditions and forecasts
    pub weather_service: Arc<WeatherService>,
    /// Suggestion service for city autocomplete
    pub suggestion_service: Arc<SuggestionService>,
    /// Stylist for LLM-phrased condition descriptions
    pub condition_stylist: Arc<ConditionStylist>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.config.environment)
            .finish_non_exhaustive()
    }
}
