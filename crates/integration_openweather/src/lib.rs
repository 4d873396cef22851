//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap API (<https://openweathermap.org/api>):
//! current conditions, the 3-hour/5-day forecast list, and the geocoding
//! endpoint behind city-name autocomplete. All calls require an API key.

pub mod client;
mod models;
mod urlencoding;

pub use client::{OpenWeatherClient, OpenWeatherConfig, OpenWeatherError, WeatherClient};
pub use models::{CurrentObservation, ForecastSample, GeoPlace};
