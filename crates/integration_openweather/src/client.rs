//! OpenWeatherMap HTTP client
//!
//! One client covers the three endpoints the dashboard needs: current
//! conditions, the 3-hour forecast list, and geocoding.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentObservation, ForecastSample, GeoPlace, api};
use crate::urlencoding;

/// OpenWeatherMap client errors
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// No API key was configured
    #[error("OpenWeatherMap API key is not configured")]
    MissingApiKey,

    /// The configured API key was rejected
    #[error("OpenWeatherMap rejected the API key")]
    InvalidApiKey,

    /// The provider does not know the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response from the weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// OpenWeatherMap service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key, required for every request
    #[serde(default)]
    pub api_key: Option<String>,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Measurement units passed to the provider (default: metric)
    #[serde(default = "default_units")]
    pub units: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_units() -> String {
    "metric".to_string()
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            units: default_units(),
        }
    }
}

/// Weather client trait for fetching weather and geocoding data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a city query
    async fn current_weather(&self, city: &str)
    -> Result<CurrentObservation, OpenWeatherError>;

    /// Get the raw 3-hour forecast readings for a city query
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastSample>, OpenWeatherError>;

    /// Look up up to `limit` geocoding matches for a city query
    async fn geocode(&self, query: &str, limit: u8)
    -> Result<Vec<GeoPlace>, OpenWeatherError>;

    /// Check if the weather service is reachable
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    units: String,
}

impl OpenWeatherClient {
    /// Geocoding results are capped by the provider
    const MAX_GEOCODE_LIMIT: u8 = 5;

    /// Create a new OpenWeatherMap client
    ///
    /// # Errors
    ///
    /// Returns [`OpenWeatherError::MissingApiKey`] when no key is configured,
    /// or a connection error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, OpenWeatherError> {
        let api_key = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(OpenWeatherError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenWeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            api_key,
            units: config.units,
        })
    }

    fn current_url(&self, city: &str) -> String {
        format!(
            "{}/data/2.5/weather?q={}&appid={}&units={}",
            self.base_url,
            urlencoding::encode(city),
            self.api_key,
            self.units
        )
    }

    fn forecast_url(&self, city: &str) -> String {
        format!(
            "{}/data/2.5/forecast?q={}&appid={}&units={}",
            self.base_url,
            urlencoding::encode(city),
            self.api_key,
            self.units
        )
    }

    fn geocode_url(&self, query: &str, limit: u8) -> String {
        format!(
            "{}/geo/1.0/direct?q={}&limit={}&appid={}",
            self.base_url,
            urlencoding::encode(query),
            limit.clamp(1, Self::MAX_GEOCODE_LIMIT),
            self.api_key
        )
    }

    /// Issue a GET and map non-success statuses to errors
    ///
    /// `city` feeds the not-found error message.
    async fn get(&self, url: &str, city: &str) -> Result<reqwest::Response, OpenWeatherError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_connect() {
                OpenWeatherError::ConnectionFailed(e.to_string())
            } else {
                OpenWeatherError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(OpenWeatherError::CityNotFound(city.to_string()));
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(OpenWeatherError::InvalidApiKey);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(OpenWeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(OpenWeatherError::ServiceUnavailable(format!(
                "HTTP {status}"
            )));
        }
        if !status.is_success() {
            return Err(OpenWeatherError::RequestFailed(format!("HTTP {status}")));
        }

        Ok(response)
    }

    fn convert_current(data: api::CurrentResponse) -> Result<CurrentObservation, OpenWeatherError> {
        let condition = data.weather.into_iter().next().ok_or_else(|| {
            OpenWeatherError::ParseError("no weather condition in response".to_string())
        })?;

        Ok(CurrentObservation {
            city: data.name,
            country: data.sys.country,
            temperature: data.main.temp,
            feels_like: data.main.feels_like,
            humidity: data.main.humidity,
            wind_speed: data.wind.speed,
            condition: condition.main,
            description: condition.description,
            sunrise: data.sys.sunrise,
            sunset: data.sys.sunset,
        })
    }

    fn convert_forecast(data: api::ForecastResponse) -> Vec<ForecastSample> {
        data.list
            .into_iter()
            .map(|entry| {
                // Entries without a weather array surface as blank labels and
                // are rejected downstream as contract violations.
                let (main, description) = entry
                    .weather
                    .into_iter()
                    .next()
                    .map(|c| (c.main, c.description))
                    .unwrap_or_default();
                ForecastSample {
                    timestamp: entry.dt_txt,
                    temperature: entry.main.temp,
                    condition: main,
                    description,
                }
            })
            .collect()
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn current_weather(
        &self,
        city: &str,
    ) -> Result<CurrentObservation, OpenWeatherError> {
        debug!("Fetching current weather");
        let url = self.current_url(city);
        let response = self.get(&url, city).await?;

        let data: api::CurrentResponse = response
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.to_string()))?;

        Self::convert_current(data)
    }

    #[instrument(skip(self))]
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastSample>, OpenWeatherError> {
        debug!("Fetching 3-hour forecast");
        let url = self.forecast_url(city);
        let response = self.get(&url, city).await?;

        let data: api::ForecastResponse = response
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.to_string()))?;

        Ok(Self::convert_forecast(data))
    }

    #[instrument(skip(self))]
    async fn geocode(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<GeoPlace>, OpenWeatherError> {
        debug!("Fetching city suggestions");
        let url = self.geocode_url(query, limit);
        let response = self.get(&url, query).await?;

        response
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.to_string()))
    }

    async fn is_healthy(&self) -> bool {
        // The geocoding endpoint is the cheapest authenticated call
        self.geocode("London", 1).await.is_ok()
    }
}
