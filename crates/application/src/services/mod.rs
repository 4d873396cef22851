//! Application services

mod condition_stylist;
mod suggestion_service;
mod weather_service;

pub use condition_stylist::{ConditionStylist, StyledCondition};
pub use suggestion_service::SuggestionService;
pub use weather_service::{Dashboard, WeatherService};
