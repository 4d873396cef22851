//! Infrastructure layer for Skycast
//!
//! Application configuration and the adapters that connect the application
//! ports to the OpenWeatherMap and inference integrations.

pub mod adapters;
pub mod config;

pub use adapters::{GeocodingAdapter, InferenceAdapter, WeatherAdapter};
pub use config::{AppConfig, Environment, OpenWeatherAppConfig, ServerConfig};
