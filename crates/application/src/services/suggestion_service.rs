//! City suggestion service
//!
//! Validates autocomplete queries and proxies them to the geocoding port.

use std::sync::Arc;

use domain::DomainError;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{CitySuggestion, GeocodingPort};

/// Default number of suggestions returned per query
const DEFAULT_LIMIT: u8 = 5;

/// Service for city-name autocomplete
pub struct SuggestionService {
    geocoding: Arc<dyn GeocodingPort>,
    limit: u8,
}

impl std::fmt::Debug for SuggestionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionService")
            .field("geocoding", &"<GeocodingPort>")
            .field("limit", &self.limit)
            .finish()
    }
}

impl SuggestionService {
    /// Create a service returning at most five suggestions per query
    pub fn new(geocoding: Arc<dyn GeocodingPort>) -> Self {
        Self {
            geocoding,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Override the suggestion limit (clamped to at least 1)
    #[must_use]
    pub fn with_limit(mut self, limit: u8) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Suggest cities matching a free-form query
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank query; provider failures pass
    /// through unchanged.
    #[instrument(skip(self))]
    pub async fn suggest(&self, query: &str) -> Result<Vec<CitySuggestion>, ApplicationError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(DomainError::ValidationError(
                "query must not be empty".to_string(),
            )
            .into());
        }

        let suggestions = self.geocoding.suggest(query, self.limit).await?;
        debug!(count = suggestions.len(), "Resolved city suggestions");
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockGeocodingPort;

    #[tokio::test]
    async fn suggest_trims_and_forwards_query() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_suggest()
            .withf(|query, limit| query == "Lond" && *limit == 5)
            .returning(|_, _| {
                Ok(vec![CitySuggestion::new("London", None, "GB")])
            });

        let service = SuggestionService::new(Arc::new(geocoding));
        let suggestions = service.suggest("  Lond  ").await.unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].full_name, "London, GB");
    }

    #[tokio::test]
    async fn blank_query_is_rejected_without_lookup() {
        let geocoding = MockGeocodingPort::new();
        let service = SuggestionService::new(Arc::new(geocoding));

        let err = service.suggest("   ").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[tokio::test]
    async fn custom_limit_is_forwarded() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_suggest()
            .withf(|_, limit| *limit == 3)
            .returning(|_, _| Ok(Vec::new()));

        let service = SuggestionService::new(Arc::new(geocoding)).with_limit(3);
        let suggestions = service.suggest("Ber").await.unwrap();
        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn limit_zero_clamps_to_one() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_suggest()
            .withf(|_, limit| *limit == 1)
            .returning(|_, _| Ok(Vec::new()));

        let service = SuggestionService::new(Arc::new(geocoding)).with_limit(0);
        assert!(service.suggest("Ber").await.is_ok());
    }

    #[tokio::test]
    async fn provider_errors_pass_through() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_suggest()
            .returning(|_, _| Err(ApplicationError::ExternalService("down".to_string())));

        let service = SuggestionService::new(Arc::new(geocoding));
        let err = service.suggest("Ber").await.unwrap_err();
        assert!(err.is_retryable());
    }
}
