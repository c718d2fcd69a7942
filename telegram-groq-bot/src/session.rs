//! Per-message chat flow: conversation store on one side, LLM client on
//! the other.

use anyhow::Result;
use conversation::ConversationStore;
use llm_client::LlmClient;
use prompt::MessageRole;
use std::sync::Arc;
use tracing::instrument;

/// Ties the conversation store to an LLM client and a system prompt.
///
/// `respond` is the whole turn: append the user message, assemble the
/// request, call the model, and append the assistant reply only on
/// success. On failure the history is left exactly as it was after the
/// user turn, so the next message continues from an uncorrupted context.
pub struct ChatSession {
    store: ConversationStore,
    llm: Arc<dyn LlmClient>,
    system_prompt: String,
}

impl ChatSession {
    pub fn new(store: ConversationStore, llm: Arc<dyn LlmClient>, system_prompt: String) -> Self {
        Self {
            store,
            llm,
            system_prompt,
        }
    }

    /// Handles one user turn and returns the assistant reply text.
    ///
    /// The store lock is never held across the network call: append and
    /// build_request each take it briefly and return owned data.
    #[instrument(skip(self, text))]
    pub async fn respond(&self, user_id: i64, text: &str) -> Result<String> {
        self.store.append(user_id, MessageRole::User, text).await;
        let messages = self.store.build_request(user_id, &self.system_prompt).await;
        let reply = self.llm.get_llm_response_with_messages(messages).await?;
        self.store
            .append(user_id, MessageRole::Assistant, reply.as_str())
            .await;
        Ok(reply)
    }

    /// Forgets the user's conversation (the `/clear` command).
    pub async fn reset(&self, user_id: i64) {
        self.store.clear(user_id).await;
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}
