//! OpenWeatherMap data models
//!
//! Public result types plus the raw wire shapes of the three endpoints.

use serde::{Deserialize, Serialize};

/// Current conditions for a resolved city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentObservation {
    /// City name as resolved by the provider
    pub city: String,
    /// ISO country code
    pub country: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Feels-like temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in meters per second
    pub wind_speed: f64,
    /// Primary condition label, e.g. "Clouds"
    pub condition: String,
    /// Detailed description, e.g. "scattered clouds"
    pub description: String,
    /// Sunrise as a Unix timestamp
    pub sunrise: i64,
    /// Sunset as a Unix timestamp
    pub sunset: i64,
}

/// One 3-hour forecast reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Sample timestamp, "YYYY-MM-DD HH:MM:SS"
    pub timestamp: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Primary condition label
    pub condition: String,
    /// Detailed description
    pub description: String,
}

/// One geocoding match for a city query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoPlace {
    /// City name
    pub name: String,
    /// ISO country code
    #[serde(default)]
    pub country: String,
    /// State or region, when reported
    #[serde(default)]
    pub state: Option<String>,
}

/// Raw wire shapes of the OpenWeatherMap responses
pub(crate) mod api {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub name: String,
        pub sys: SysData,
        pub main: MainData,
        #[serde(default)]
        pub weather: Vec<ConditionData>,
        pub wind: WindData,
    }

    #[derive(Debug, Deserialize)]
    pub struct SysData {
        #[serde(default)]
        pub country: String,
        pub sunrise: i64,
        pub sunset: i64,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainData {
        pub temp: f64,
        pub feels_like: f64,
        pub humidity: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct ConditionData {
        pub main: String,
        pub description: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct WindData {
        pub speed: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastEntry>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastEntry {
        pub dt_txt: String,
        pub main: ForecastMain,
        #[serde(default)]
        pub weather: Vec<ConditionData>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastMain {
        pub temp: f64,
    }
}
