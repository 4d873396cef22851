//! City name value object
//!
//! A validated, trimmed city query as entered by the user.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::CityName;
//!
//! let city = CityName::new("  London ").expect("valid city");
//! assert_eq!(city.as_str(), "London");
//!
//! assert!(CityName::new("   ").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a city name fails validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidCityName {
    /// The name was empty or whitespace-only
    #[error("city name must not be empty")]
    Empty,
    /// The name exceeded [`CityName::MAX_LENGTH`] characters
    #[error("city name exceeds {} characters", CityName::MAX_LENGTH)]
    TooLong,
}

/// A validated city query
///
/// Construction trims surrounding whitespace and rejects empty or
/// unreasonably long input before it reaches the weather provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CityName(String);

impl CityName {
    /// Maximum accepted length in characters
    pub const MAX_LENGTH: usize = 128;

    /// Create a validated city name from user input
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCityName`] when the trimmed input is empty or longer
    /// than [`Self::MAX_LENGTH`] characters.
    pub fn new(input: impl AsRef<str>) -> Result<Self, InvalidCityName> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InvalidCityName::Empty);
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(InvalidCityName::TooLong);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The validated name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for CityName {
    type Err = InvalidCityName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Custom deserialization that applies the same validation as [`CityName::new`]
impl<'de> Deserialize<'de> for CityName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_whitespace() {
        let city = CityName::new("  New York  ").unwrap();
        assert_eq!(city.as_str(), "New York");
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(CityName::new(""), Err(InvalidCityName::Empty));
        assert_eq!(CityName::new("   "), Err(InvalidCityName::Empty));
    }

    #[test]
    fn new_rejects_too_long() {
        let long = "a".repeat(CityName::MAX_LENGTH + 1);
        assert_eq!(CityName::new(long), Err(InvalidCityName::TooLong));
    }

    #[test]
    fn new_accepts_max_length() {
        let max = "a".repeat(CityName::MAX_LENGTH);
        assert!(CityName::new(max).is_ok());
    }

    #[test]
    fn new_accepts_unicode() {
        let city = CityName::new("München").unwrap();
        assert_eq!(city.as_str(), "München");
    }

    #[test]
    fn display_shows_name() {
        let city = CityName::new("Tokyo").unwrap();
        assert_eq!(format!("{city}"), "Tokyo");
    }

    #[test]
    fn from_str_parses() {
        let city: CityName = "Paris".parse().unwrap();
        assert_eq!(city.as_str(), "Paris");
    }

    #[test]
    fn deserialization_validates() {
        let city: CityName = serde_json::from_str("\"  Sydney \"").unwrap();
        assert_eq!(city.as_str(), "Sydney");

        let result: Result<CityName, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }

    #[test]
    fn serialization_is_plain_string() {
        let city = CityName::new("London").unwrap();
        assert_eq!(serde_json::to_string(&city).unwrap(), "\"London\"");
    }
}
