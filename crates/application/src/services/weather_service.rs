//! Weather service
//!
//! Fetches current conditions and the aggregated 5-day forecast through the
//! weather provider port. The two fetches behind a dashboard load run
//! concurrently.

use std::sync::Arc;

use domain::value_objects::CityName;
use domain::{DailySummary, aggregate_daily};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{CurrentConditions, WeatherProviderPort};

/// Current conditions and forecast for one dashboard load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    /// Current conditions
    pub current: CurrentConditions,
    /// Aggregated daily forecast, at most five days
    pub forecast: Vec<DailySummary>,
}

/// Service for current weather and forecast retrieval
pub struct WeatherService {
    provider: Arc<dyn WeatherProviderPort>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("provider", &"<WeatherProviderPort>")
            .finish()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(provider: Arc<dyn WeatherProviderPort>) -> Self {
        Self { provider }
    }

    /// Current conditions for a city
    #[instrument(skip(self), fields(city = %city))]
    pub async fn current(&self, city: &CityName) -> Result<CurrentConditions, ApplicationError> {
        let current = self.provider.current_weather(city).await?;
        debug!(
            temperature = current.temperature,
            condition = %current.condition,
            "Retrieved current weather"
        );
        Ok(current)
    }

    /// Aggregated daily forecast for a city
    ///
    /// Fetches the provider's 3-hour samples and reduces them with the
    /// domain aggregation core.
    #[instrument(skip(self), fields(city = %city))]
    pub async fn forecast(&self, city: &CityName) -> Result<Vec<DailySummary>, ApplicationError> {
        let samples = self.provider.forecast_samples(city).await?;
        let summaries = aggregate_daily(&samples)?;
        debug!(
            samples = samples.len(),
            days = summaries.len(),
            "Aggregated forecast"
        );
        Ok(summaries)
    }

    /// Current conditions and forecast in one call
    ///
    /// The two provider fetches run concurrently.
    #[instrument(skip(self), fields(city = %city))]
    pub async fn dashboard(&self, city: &CityName) -> Result<Dashboard, ApplicationError> {
        let (current, forecast) = tokio::join!(self.current(city), self.forecast(city));
        Ok(Dashboard {
            current: current?,
            forecast: forecast?,
        })
    }

    /// Check if the weather provider is reachable
    pub async fn is_available(&self) -> bool {
        self.provider.is_available().await
    }
}
