//! [`LlmClient`] backed by [`OpenAIClient`], carrying the model id and
//! sampling parameters for every request.

use anyhow::Result;
use async_trait::async_trait;
use prompt::ChatMessage;
use std::time::Duration;
use tracing::instrument;

use super::{chat_message_to_openai, LlmClient, OpenAIClient};

pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Bound on one completion round trip. Expiry surfaces as an ordinary
/// inference failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI-compatible [`LlmClient`] implementation.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: OpenAIClient,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        Self::with_client(OpenAIClient::new(api_key))
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self::with_client(OpenAIClient::with_base_url(api_key, base_url))
    }

    fn with_client(client: OpenAIClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages))]
    async fn get_llm_response_with_messages(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let mut openai_messages = Vec::with_capacity(messages.len());
        for msg in &messages {
            openai_messages.push(chat_message_to_openai(msg)?);
        }
        let completion = self.client.chat_completion(
            &self.model,
            openai_messages,
            self.temperature,
            self.max_tokens,
        );
        tokio::time::timeout(REQUEST_TIMEOUT, completion)
            .await
            .map_err(|_| {
                anyhow::anyhow!("LLM request timed out after {}s", REQUEST_TIMEOUT.as_secs())
            })?
    }
}
