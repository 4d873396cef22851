//! Inference core for Skycast
//!
//! Abstraction over the language model used for condition phrasing, plus an
//! Ollama-compatible engine implementation.

pub mod config;
pub mod error;
pub mod ollama;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use ollama::OllamaInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage};
