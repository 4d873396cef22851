//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The requested city is unknown to the weather provider
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::RateLimited | ApplicationError::ExternalService(_)
        )
    }
}
