//! API error handling
//!
//! Maps application errors onto HTTP statuses and the response envelope the
//! dashboard expects. In production mode, internal errors return generic
//! messages without details.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Global flag to control error detail exposure
/// Set to false in production to prevent information leakage
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether internal error details should be exposed in responses.
///
/// In production environments, this should be set to `false` to prevent
/// leaking implementation details or upstream URLs.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

/// Check if internal error details should be exposed
fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false for errors
    pub success: bool,
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            Self::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limited",
                "Rate limit exceeded".to_string(),
            ),
            Self::ServiceUnavailable(msg) => {
                // Upstream errors might leak provider URLs
                let sanitized = if should_expose_details() {
                    msg
                } else {
                    "Service temporarily unavailable".to_string()
                };
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "service_unavailable",
                    sanitized,
                )
            },
            Self::Internal(msg) => {
                // Internal errors should never leak details in production
                let sanitized = if should_expose_details() {
                    msg
                } else {
                    "An internal error occurred".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", sanitized)
            },
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            // A malformed sample means the provider broke its contract,
            // not the caller
            ApplicationError::Domain(e @ domain::DomainError::InvalidSample(_)) => {
                Self::Internal(e.to_string())
            },
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::CityNotFound(city) => Self::NotFound(format!(
                "Could not find \"{city}\". Please check the city name and try again."
            )),
            ApplicationError::RateLimited => Self::RateLimited,
            ApplicationError::ExternalService(msg) | ApplicationError::Inference(msg) => {
                Self::ServiceUnavailable(msg)
            },
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}
