//! Integration configuration: OpenWeatherMap.

use integration_openweather::OpenWeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// OpenWeatherMap provider configuration
///
/// The API key usually arrives through `SKYCAST_OPENWEATHER_APIKEY` rather
/// than the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenWeatherAppConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key for all OpenWeatherMap endpoints
    ///
    /// Obtain from <https://openweathermap.org/appid>
    #[serde(default, alias = "apikey")]
    pub api_key: Option<SecretString>,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Measurement units passed to the provider
    #[serde(default = "default_units")]
    pub units: String,

    /// Maximum number of autocomplete suggestions per query (1-5)
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: u8,
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

const fn default_suggestion_limit() -> u8 {
    5
}

impl Default for OpenWeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            units: default_units(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

impl OpenWeatherAppConfig {
    /// Build the integration client configuration, exposing the secret key
    #[must_use]
    pub fn to_client_config(&self) -> OpenWeatherConfig {
        OpenWeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|key| key.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
            units: self.units.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_openweathermap() {
        let config = OpenWeatherAppConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org");
        assert_eq!(config.units, "metric");
        assert_eq!(config.suggestion_limit, 5);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn apikey_alias_accepted() {
        let parsed: OpenWeatherAppConfig = toml::from_str("apikey = \"abc123\"").unwrap();
        let client_config = parsed.to_client_config();
        assert_eq!(client_config.api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn debug_output_redacts_key() {
        let parsed: OpenWeatherAppConfig = toml::from_str("api_key = \"abc123\"").unwrap();
        let debug = format!("{parsed:?}");
        assert!(!debug.contains("abc123"));
    }

    #[test]
    fn to_client_config_copies_settings() {
        let config = OpenWeatherAppConfig {
            timeout_secs: 10,
            units: "imperial".to_string(),
            ..Default::default()
        };
        let client_config = config.to_client_config();
        assert_eq!(client_config.timeout_secs, 10);
        assert_eq!(client_config.units, "imperial");
        assert!(client_config.api_key.is_none());
    }
}
