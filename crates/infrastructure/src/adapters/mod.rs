//! Adapters
//!
//! Implementations of the application ports on top of the integration crates.

mod geocoding_adapter;
mod inference_adapter;
mod weather_adapter;

pub use geocoding_adapter::GeocodingAdapter;
pub use inference_adapter::InferenceAdapter;
pub use weather_adapter::WeatherAdapter;
