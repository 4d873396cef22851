//! Time-of-day value object
//!
//! Coarse part of the day used to tailor condition descriptions.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a time-of-day label is not recognized
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown time of day: {0} (expected morning, afternoon, evening or night)")]
pub struct InvalidTimeOfDay(String);

/// Part of the day, as the dashboard reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// The lowercase label used in prompts and on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    /// Derive the part of day from an hour of the day (0-23)
    #[must_use]
    pub const fn from_hour(hour: u8) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = InvalidTimeOfDay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            "night" => Ok(Self::Night),
            other => Err(InvalidTimeOfDay(other.to_string())),
        }
    }
}
