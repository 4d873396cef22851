//! Inference port
//!
//! Defines the interface to the language model used for condition phrasing.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for single-turn language model completions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Run one completion with a system prompt and a user prompt, returning
    /// the raw model output
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ApplicationError>;

    /// Check if the inference backend is reachable
    async fn is_healthy(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn InferencePort>();
    }
}
