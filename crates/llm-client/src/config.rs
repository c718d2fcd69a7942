//! LLM configuration loaded from environment variables.

use std::env;

use crate::openai_llm::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Inference-API configuration from the environment.
///
/// A missing `GROQ_API_KEY` is tolerated here: the key is not a startup
/// requirement, and an empty key surfaces as a per-message inference
/// failure on the first request.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub system_prompt: Option<String>,
}

impl EnvLlmConfig {
    /// Loads from environment variables, defaulting every unset field.
    pub fn from_env() -> Self {
        let api_key = env::var("GROQ_API_KEY").unwrap_or_default();
        let base_url =
            env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let temperature = env::var("LLM_TEMPERATURE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);
        let max_tokens = env::var("LLM_MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);
        let system_prompt = env::var("SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Self {
            api_key,
            base_url,
            model,
            temperature,
            max_tokens,
            system_prompt,
        }
    }
}
