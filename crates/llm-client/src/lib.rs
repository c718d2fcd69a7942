//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an implementation for
//! OpenAI-compatible chat-completion APIs (Groq uses the same wire
//! format, only the base URL differs). Transport-agnostic callers hold an
//! `Arc<dyn LlmClient>` and never see the underlying HTTP errors as
//! anything other than `anyhow::Error`.

use anyhow::Result;
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};
use async_trait::async_trait;
use prompt::{ChatMessage, MessageRole};

mod config;
mod openai;
mod openai_llm;

pub use config::EnvLlmConfig;
pub use openai::{mask_token, OpenAIClient};
pub use openai_llm::OpenAILlmClient;

/// LLM client interface: one completion from an ordered message list.
///
/// Implementations send exactly the messages they are given; the system
/// turn is the caller's responsibility (it is part of request assembly,
/// not of transport).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model's reply text for the given messages
    /// (system/user/assistant), or an error from the API boundary.
    async fn get_llm_response_with_messages(&self, messages: Vec<ChatMessage>) -> Result<String>;
}

/// Converts a single [`ChatMessage`] into the OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}
