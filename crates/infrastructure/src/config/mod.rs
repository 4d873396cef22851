//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - `integrations`: OpenWeatherMap provider settings
//!
//! Inference settings come from `ai_core` and are embedded as-is.

mod integrations;
mod server;

use ai_core::InferenceConfig;
use serde::Deserialize;
use std::fmt;

pub use integrations::OpenWeatherAppConfig;
pub use server::ServerConfig;

/// Application environment (development or production)
///
/// Controls how much error detail the HTTP layer exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - error details exposed
    #[default]
    Development,
    /// Production environment - sanitized error responses
    Production,
}

impl Environment {
    /// Whether internal error details may appear in HTTP responses
    #[must_use]
    pub const fn expose_error_details(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// OpenWeatherMap configuration
    #[serde(default)]
    pub openweather: OpenWeatherAppConfig,

    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config.toml`, and
    /// `SKYCAST_*` environment variables (e.g. `SKYCAST_SERVER_PORT`,
    /// `SKYCAST_OPENWEATHER_APIKEY`).
    ///
    /// # Errors
    ///
    /// Returns an error when the file or environment contain values that do
    /// not deserialize into the configuration shape.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("inference.base_url", "http://localhost:11434")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix("SKYCAST")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_development() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert!(config.environment.expose_error_details());
    }

    #[test]
    fn environment_from_str() {
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!(
            "Production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn environment_display() {
        assert_eq!(Environment::Development.to_string(), "development");
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn production_hides_error_details() {
        assert!(!Environment::Production.expose_error_details());
    }

    #[test]
    fn config_deserializes_from_toml() {
        let parsed: AppConfig = toml::from_str(
            r#"
            environment = "production"

            [server]
            port = 8080

            [openweather]
            apikey = "abc123"

            [inference]
            default_model = "llama3.2-1b-instruct"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.environment, Environment::Production);
        assert_eq!(parsed.server.port, 8080);
        assert_eq!(parsed.inference.default_model, "llama3.2-1b-instruct");
        assert!(parsed.openweather.api_key.is_some());
    }
}
