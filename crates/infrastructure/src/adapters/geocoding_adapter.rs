//! Geocoding adapter - implements GeocodingPort using integration_openweather

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{CitySuggestion, GeocodingPort};
use async_trait::async_trait;
use integration_openweather::{GeoPlace, OpenWeatherClient, WeatherClient};
use tracing::{debug, instrument};

use super::weather_adapter::WeatherAdapter;

/// Adapter for OpenWeatherMap geocoding lookups
pub struct GeocodingAdapter {
    client: Arc<OpenWeatherClient>,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create a new adapter over a shared client
    pub fn new(client: Arc<OpenWeatherClient>) -> Self {
        Self { client }
    }

    fn map_place(place: GeoPlace) -> CitySuggestion {
        CitySuggestion::new(place.name, place.state, place.country)
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn suggest(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<CitySuggestion>, ApplicationError> {
        let places = self
            .client
            .geocode(query, limit)
            .await
            .map_err(WeatherAdapter::map_error)?;

        debug!(matches = places.len(), "Resolved geocoding matches");

        Ok(places.into_iter().map(Self::map_place).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_place_with_state() {
        let suggestion = GeocodingAdapter::map_place(GeoPlace {
            name: "Portland".to_string(),
            country: "US".to_string(),
            state: Some("Oregon".to_string()),
        });
        assert_eq!(suggestion.full_name, "Portland, Oregon, US");
    }

    #[test]
    fn map_place_without_state() {
        let suggestion = GeocodingAdapter::map_place(GeoPlace {
            name: "London".to_string(),
            country: "GB".to_string(),
            state: None,
        });
        assert_eq!(suggestion.full_name, "London, GB");
    }
}
