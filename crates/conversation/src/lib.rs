//! # Conversation store
//!
//! Per-user chat history with a fixed retention window, plus request
//! assembly for chat-completion APIs.
//!
//! The store owns all conversation state for the process: a map from
//! Telegram user id to that user's chronological turns. History is trimmed
//! at append time so the per-user footprint stays bounded no matter how
//! rarely it is read; idle users are never evicted, so this is the only
//! growth guard the process has. Stored turns never include a system
//! message; the system turn exists only in the assembled request.

use prompt::{ChatMessage, MessageRole};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Maximum turns kept per user: 10 user/assistant exchanges.
///
/// Count-based rather than token-based, so it can under- or over-trim
/// relative to the model's real context budget. Known imprecision.
pub const MAX_HISTORY_TURNS: usize = 20;

type HistoryMap = HashMap<i64, Vec<ChatMessage>>;

/// In-memory conversation state keyed by user id. Cheap to clone; clones
/// share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    histories: Arc<RwLock<HistoryMap>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one turn to the user's history, creating the history on
    /// first contact, then trims to the most recent [`MAX_HISTORY_TURNS`].
    /// Always succeeds.
    pub async fn append(&self, user_id: i64, role: MessageRole, content: impl Into<String>) {
        let mut histories = self.histories.write().await;
        let history = histories.entry(user_id).or_default();
        history.push(ChatMessage {
            role,
            content: content.into(),
        });
        if history.len() > MAX_HISTORY_TURNS {
            let excess = history.len() - MAX_HISTORY_TURNS;
            history.drain(..excess);
            debug!(user_id, dropped = excess, "Trimmed conversation history");
        }
    }

    /// Resets the user's history to empty. Creates an empty entry if the
    /// user was never seen. Idempotent.
    pub async fn clear(&self, user_id: i64) {
        let mut histories = self.histories.write().await;
        histories.insert(user_id, Vec::new());
        info!(user_id, "Cleared conversation history");
    }

    /// Assembles the message sequence for one inference call: a single
    /// synthetic system turn followed by the user's full current history.
    /// Does not mutate stored state.
    pub async fn build_request(&self, user_id: i64, system_prompt: &str) -> Vec<ChatMessage> {
        let histories = self.histories.read().await;
        let history = histories.get(&user_id).map(Vec::as_slice).unwrap_or(&[]);
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::system(system_prompt));
        messages.extend_from_slice(history);
        messages
    }

    /// Number of stored turns for the user (0 if never seen).
    pub async fn len(&self, user_id: i64) -> usize {
        let histories = self.histories.read().await;
        histories.get(&user_id).map(Vec::len).unwrap_or(0)
    }

    pub async fn is_empty(&self, user_id: i64) -> bool {
        self.len(user_id).await == 0
    }
}
