//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A forecast sample violated the upstream provider contract
    #[error("Invalid forecast sample: {0}")]
    InvalidSample(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an `InvalidSample` error
    pub fn invalid_sample(reason: impl Into<String>) -> Self {
        Self::InvalidSample(reason.into())
    }
}
