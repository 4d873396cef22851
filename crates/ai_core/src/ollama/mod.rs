//! Ollama-compatible inference engine implementation
//!
//! Connects to any Ollama-compatible server, which provides an
//! OpenAI-compatible chat API.

mod client;

pub use client::OllamaInferenceEngine;
