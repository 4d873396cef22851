//! Configuration for the inference engine

use serde::{Deserialize, Serialize};

/// Configuration for the inference engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the Ollama-compatible inference server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default model to use
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "qwen2.5-1.5b-instruct".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_max_tokens() -> u32 {
    256
}

const fn default_temperature() -> f32 {
    0.7
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_model: default_model(),
            timeout_ms: default_timeout_ms(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = InferenceConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.default_model, "qwen2.5-1.5b-instruct");
        assert_eq!(config.timeout_ms, 30000);
        assert_eq!(config.max_tokens, 256);
        assert!((config.temperature - 0.7).abs() < 0.01);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: InferenceConfig =
            serde_json::from_str(r#"{"default_model": "llama3.2-1b-instruct"}"#).unwrap();
        assert_eq!(config.default_model, "llama3.2-1b-instruct");
        assert_eq!(config.base_url, "http://localhost:11434");
    }
}
