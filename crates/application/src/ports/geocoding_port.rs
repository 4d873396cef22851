//! Geocoding port
//!
//! Defines the interface behind the city-name autocomplete.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// One autocomplete suggestion for a city query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitySuggestion {
    /// City name
    pub name: String,
    /// ISO country code
    pub country: String,
    /// State or region, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Preformatted display name: "Name, State, Country" (state omitted
    /// when absent)
    pub full_name: String,
}

impl CitySuggestion {
    /// Build a suggestion, deriving the display name
    pub fn new(
        name: impl Into<String>,
        state: Option<String>,
        country: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let country = country.into();
        let full_name = state.as_ref().map_or_else(
            || format!("{name}, {country}"),
            |state| format!("{name}, {state}, {country}"),
        );
        Self {
            name,
            country,
            state,
            full_name,
        }
    }
}

/// Port for city-name geocoding lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Look up up to `limit` city suggestions matching a free-form query
    async fn suggest(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<CitySuggestion>, ApplicationError>;
}
