//! Shared handler types

use application::ApplicationError;
use domain::value_objects::CityName;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Success envelope wrapping every data response
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Always true for successful responses
    pub success: bool,
    /// Response payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in the success envelope
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Request body carrying a city query
#[derive(Debug, Deserialize)]
pub struct CityRequest {
    /// City to look up
    pub city: String,
}

impl CityRequest {
    /// Validate the requested city name
    pub fn city_name(&self) -> Result<CityName, ApiError> {
        CityName::new(&self.city).map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

/// Map a lookup error onto the response the dashboard shows for this surface
///
/// `what` names the thing being fetched ("weather" or "forecast") so the
/// not-found message reads naturally.
pub fn city_lookup_error(err: ApplicationError, what: &str, city: &CityName) -> ApiError {
    match err {
        ApplicationError::CityNotFound(_) => ApiError::NotFound(format!(
            "Could not find {what} for \"{city}\". Please check the city name and try again."
        )),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_response_envelope() {
        let resp = ApiResponse::ok(42);
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, "{\"success\":true,\"data\":42}");
    }

    #[test]
    fn city_request_validates() {
        let request = CityRequest {
            city: " London ".to_string(),
        };
        assert_eq!(request.city_name().unwrap().as_str(), "London");

        let blank = CityRequest {
            city: "  ".to_string(),
        };
        assert!(matches!(blank.city_name(), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn city_lookup_error_formats_not_found() {
        let city = CityName::new("Atlantis").unwrap();
        let err = city_lookup_error(
            ApplicationError::CityNotFound("Atlantis".to_string()),
            "weather",
            &city,
        );
        let ApiError::NotFound(msg) = err else {
            unreachable!("Expected NotFound");
        };
        assert_eq!(
            msg,
            "Could not find weather for \"Atlantis\". Please check the city name and try again."
        );
    }

    #[test]
    fn city_lookup_error_passes_other_errors_through() {
        let city = CityName::new("London").unwrap();
        let err = city_lookup_error(
            ApplicationError::ExternalService("down".to_string()),
            "weather",
            &city,
        );
        assert!(matches!(err, ApiError::ServiceUnavailable(_)));
    }
}
