//! Value objects
//!
//! Small validated types shared across the domain.

mod city_name;
mod time_of_day;

pub use city_name::{CityName, InvalidCityName};
pub use time_of_day::{InvalidTimeOfDay, TimeOfDay};
