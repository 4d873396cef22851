//! Inference adapter - implements InferencePort using ai_core

use std::sync::Arc;

use ai_core::{InferenceEngine, InferenceRequest};
use application::error::ApplicationError;
use application::ports::InferencePort;
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Adapter exposing an ai_core engine as the application inference port
pub struct InferenceAdapter {
    engine: Arc<dyn InferenceEngine>,
}

impl std::fmt::Debug for InferenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceAdapter")
            .field("engine", &"<InferenceEngine>")
            .finish()
    }
}

impl InferenceAdapter {
    /// Create a new adapter over an inference engine
    pub fn new(engine: Arc<dyn InferenceEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl InferencePort for InferenceAdapter {
    #[instrument(skip_all)]
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ApplicationError> {
        let request = InferenceRequest::with_system(system_prompt, user_prompt);

        let response = self
            .engine
            .generate(request)
            .await
            .map_err(|e| ApplicationError::Inference(e.to_string()))?;

        debug!(model = %response.model, "Completed inference request");

        Ok(response.content)
    }

    async fn is_healthy(&self) -> bool {
        match self.engine.health_check().await {
            Ok(healthy) => healthy,
            Err(e) => {
                warn!(error = %e, "Inference health check failed");
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_core::{InferenceError, InferenceResponse};

    struct StubEngine {
        response: Option<String>,
    }

    #[async_trait]
    impl InferenceEngine for StubEngine {
        async fn generate(
            &self,
            request: InferenceRequest,
        ) -> Result<InferenceResponse, InferenceError> {
            assert_eq!(request.messages.len(), 2);
            self.response.clone().map_or_else(
                || Err(InferenceError::ServerError("boom".to_string())),
                |content| {
                    Ok(InferenceResponse {
                        content,
                        model: "stub".to_string(),
                        usage: None,
                        finish_reason: Some("stop".to_string()),
                    })
                },
            )
        }

        async fn health_check(&self) -> Result<bool, InferenceError> {
            Ok(self.response.is_some())
        }

        async fn list_models(&self) -> Result<Vec<String>, InferenceError> {
            Ok(vec!["stub".to_string()])
        }

        fn default_model(&self) -> &str {
            "stub"
        }
    }

    #[tokio::test]
    async fn complete_returns_model_content() {
        let adapter = InferenceAdapter::new(Arc::new(StubEngine {
            response: Some("{\"description\": \"Sunny.\", \"icon\": \"sun\"}".to_string()),
        }));

        let content = adapter.complete("system", "user").await.unwrap();
        assert!(content.contains("Sunny"));
    }

    #[tokio::test]
    async fn engine_errors_become_inference_errors() {
        let adapter = InferenceAdapter::new(Arc::new(StubEngine { response: None }));

        let err = adapter.complete("system", "user").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Inference(_)));
    }

    #[tokio::test]
    async fn health_passes_through() {
        let healthy = InferenceAdapter::new(Arc::new(StubEngine {
            response: Some(String::new()),
        }));
        assert!(healthy.is_healthy().await);

        let unhealthy = InferenceAdapter::new(Arc::new(StubEngine { response: None }));
        assert!(!unhealthy.is_healthy().await);
    }
}
