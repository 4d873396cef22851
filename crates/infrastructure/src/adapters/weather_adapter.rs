//! Weather adapter - implements WeatherProviderPort using integration_openweather

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{CurrentConditions, WeatherProviderPort};
use async_trait::async_trait;
use domain::value_objects::CityName;
use domain::RawSample;
use integration_openweather::{
    CurrentObservation, ForecastSample, OpenWeatherClient, OpenWeatherError, WeatherClient,
};
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap provider
pub struct WeatherAdapter {
    client: Arc<OpenWeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter over a shared client
    pub fn new(client: Arc<OpenWeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration errors to application errors
    pub(crate) fn map_error(err: OpenWeatherError) -> ApplicationError {
        match err {
            OpenWeatherError::CityNotFound(city) => ApplicationError::CityNotFound(city),
            OpenWeatherError::MissingApiKey | OpenWeatherError::InvalidApiKey => {
                ApplicationError::Configuration(err.to_string())
            },
            OpenWeatherError::ConnectionFailed(e)
            | OpenWeatherError::RequestFailed(e)
            | OpenWeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            OpenWeatherError::ParseError(e) => ApplicationError::Internal(e),
            OpenWeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert an integration observation to port conditions, rounding
    /// temperatures the way the dashboard displays them
    #[allow(clippy::cast_possible_truncation)]
    fn map_current(observation: CurrentObservation) -> CurrentConditions {
        CurrentConditions {
            temperature: observation.temperature.round() as i32,
            humidity: observation.humidity,
            condition: observation.condition,
            city: observation.city,
            country: observation.country,
            wind_speed: observation.wind_speed,
            feels_like: observation.feels_like.round() as i32,
            sunrise: observation.sunrise,
            sunset: observation.sunset,
        }
    }

    fn map_sample(sample: ForecastSample) -> RawSample {
        RawSample {
            timestamp: sample.timestamp,
            temperature: sample.temperature,
            condition: sample.condition,
            description: sample.description,
        }
    }
}

#[async_trait]
impl WeatherProviderPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn current_weather(
        &self,
        city: &CityName,
    ) -> Result<CurrentConditions, ApplicationError> {
        let observation = self
            .client
            .current_weather(city.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(
            resolved = %observation.city,
            condition = %observation.condition,
            "Retrieved current weather"
        );

        Ok(Self::map_current(observation))
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn forecast_samples(
        &self,
        city: &CityName,
    ) -> Result<Vec<RawSample>, ApplicationError> {
        let samples = self
            .client
            .forecast(city.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(samples = samples.len(), "Retrieved forecast samples");

        Ok(samples.into_iter().map(Self::map_sample).collect())
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_error_city_not_found() {
        let err = WeatherAdapter::map_error(OpenWeatherError::CityNotFound("Atlantis".into()));
        assert!(matches!(err, ApplicationError::CityNotFound(city) if city == "Atlantis"));
    }

    #[test]
    fn map_error_missing_key_is_configuration() {
        let err = WeatherAdapter::map_error(OpenWeatherError::MissingApiKey);
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn map_error_rate_limited() {
        let err = WeatherAdapter::map_error(OpenWeatherError::RateLimitExceeded);
        assert!(matches!(err, ApplicationError::RateLimited));
    }

    #[test]
    fn map_error_connection_is_external_service() {
        let err = WeatherAdapter::map_error(OpenWeatherError::ConnectionFailed("timeout".into()));
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[test]
    fn map_current_rounds_temperatures() {
        let observation = CurrentObservation {
            city: "London".to_string(),
            country: "GB".to_string(),
            temperature: 14.6,
            feels_like: -2.5,
            humidity: 71,
            wind_speed: 4.1,
            condition: "Clouds".to_string(),
            description: "broken clouds".to_string(),
            sunrise: 1,
            sunset: 2,
        };

        let current = WeatherAdapter::map_current(observation);
        assert_eq!(current.temperature, 15);
        // Half-away-from-zero, matching the aggregation core
        assert_eq!(current.feels_like, -3);
    }

    #[test]
    fn map_sample_is_field_for_field() {
        let sample = WeatherAdapter::map_sample(ForecastSample {
            timestamp: "2024-01-01 09:00:00".to_string(),
            temperature: 10.2,
            condition: "Rain".to_string(),
            description: "light rain".to_string(),
        });

        assert_eq!(sample.timestamp, "2024-01-01 09:00:00");
        assert_eq!(sample.condition, "Rain");
    }
}
