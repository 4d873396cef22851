//! Weather provider port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::value_objects::CityName;
use domain::RawSample;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Current weather conditions for a resolved city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius, rounded
    pub temperature: i32,
    /// Relative humidity in percent (0-100)
    pub humidity: u8,
    /// Condition label, e.g. "Clouds"
    pub condition: String,
    /// City name as resolved by the provider
    pub city: String,
    /// ISO country code of the city
    pub country: String,
    /// Wind speed in meters per second
    pub wind_speed: f64,
    /// Feels-like temperature in Celsius, rounded
    pub feels_like: i32,
    /// Sunrise as a Unix timestamp
    pub sunrise: i64,
    /// Sunset as a Unix timestamp
    pub sunset: i64,
}

/// Port for weather provider operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherProviderPort: Send + Sync {
    /// Get current weather conditions for a city
    async fn current_weather(
        &self,
        city: &CityName,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Get the raw 3-hour forecast samples for a city
    ///
    /// Samples arrive in provider order and are aggregated by the domain
    /// core, not here.
    async fn forecast_samples(&self, city: &CityName)
    -> Result<Vec<RawSample>, ApplicationError>;

    /// Check if the weather provider is reachable
    async fn is_available(&self) -> bool;
}
