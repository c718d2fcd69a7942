//! Unit tests for the chat session flow.
//!
//! Uses hand-rolled mock LLM clients; does not call Telegram or Groq.

use async_trait::async_trait;
use conversation::{ConversationStore, MAX_HISTORY_TURNS};
use llm_client::LlmClient;
use prompt::{ChatMessage, MessageRole};
use std::sync::Arc;
use telegram_groq_bot::ChatSession;
use tokio::sync::Mutex;

/// Mock client that echoes the last request message back.
struct EchoLlmClient;

#[async_trait]
impl LlmClient for EchoLlmClient {
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> anyhow::Result<String> {
        let last = messages.last().expect("request is never empty");
        Ok(format!("echo: {}", last.content))
    }
}

/// Mock client that always fails, like a network or API error would.
struct FailingLlmClient;

#[async_trait]
impl LlmClient for FailingLlmClient {
    async fn get_llm_response_with_messages(
        &self,
        _messages: Vec<ChatMessage>,
    ) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("inference unavailable"))
    }
}

/// Mock client that records every request it receives.
struct RecordingLlmClient {
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

#[async_trait]
impl LlmClient for RecordingLlmClient {
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> anyhow::Result<String> {
        self.requests.lock().await.push(messages);
        Ok("ok".to_string())
    }
}

fn session_with(llm: Arc<dyn LlmClient>) -> ChatSession {
    ChatSession::new(ConversationStore::new(), llm, "P".to_string())
}

#[tokio::test]
async fn successful_turn_appends_user_and_assistant() {
    let session = session_with(Arc::new(EchoLlmClient));

    let reply = session.respond(1, "hello").await.unwrap();

    assert_eq!(reply, "echo: hello");
    assert_eq!(session.store().len(1).await, 2);
}

#[tokio::test]
async fn request_starts_with_system_then_full_history() {
    let recorder = Arc::new(RecordingLlmClient {
        requests: Mutex::new(Vec::new()),
    });
    let session = ChatSession::new(
        ConversationStore::new(),
        recorder.clone(),
        "P".to_string(),
    );

    session.respond(1, "first").await.unwrap();
    session.respond(1, "second").await.unwrap();

    let requests = recorder.requests.lock().await;
    assert_eq!(requests.len(), 2);

    // First call: system + the new user turn.
    assert_eq!(
        requests[0],
        vec![ChatMessage::system("P"), ChatMessage::user("first")]
    );

    // Second call: system + full history including the first exchange.
    assert_eq!(
        requests[1],
        vec![
            ChatMessage::system("P"),
            ChatMessage::user("first"),
            ChatMessage::assistant("ok"),
            ChatMessage::user("second"),
        ]
    );
}

#[tokio::test]
async fn failure_leaves_history_unmodified() {
    let store = ConversationStore::new();
    // One prior exchange plus the failing turn = 3 turns total.
    store.append(1, MessageRole::User, "earlier question").await;
    store.append(1, MessageRole::Assistant, "earlier answer").await;

    let session = ChatSession::new(store, Arc::new(FailingLlmClient), "P".to_string());

    let err = session.respond(1, "does this work?").await.unwrap_err();
    assert!(err.to_string().contains("inference unavailable"));

    // User turn present exactly once, no assistant turn appended.
    assert_eq!(session.store().len(1).await, 3);
    let request = session.store().build_request(1, "P").await;
    assert_eq!(request.last().unwrap(), &ChatMessage::user("does this work?"));
    let occurrences = request
        .iter()
        .filter(|m| m.content == "does this work?")
        .count();
    assert_eq!(occurrences, 1);
}

#[tokio::test]
async fn failed_turn_does_not_block_the_next_one() {
    let store = ConversationStore::new();
    let failing = ChatSession::new(store.clone(), Arc::new(FailingLlmClient), "P".to_string());
    failing.respond(1, "first try").await.unwrap_err();

    // Same store, working client: conversation continues from the same context.
    let working = ChatSession::new(store, Arc::new(EchoLlmClient), "P".to_string());
    let reply = working.respond(1, "second try").await.unwrap();

    assert_eq!(reply, "echo: second try");
    // first try (kept), second try, assistant reply.
    assert_eq!(working.store().len(1).await, 3);
}

#[tokio::test]
async fn long_conversation_caps_at_retention_bound() {
    let session = session_with(Arc::new(EchoLlmClient));

    for i in 0..25 {
        session.respond(1, &format!("message {i}")).await.unwrap();
    }

    assert_eq!(session.store().len(1).await, MAX_HISTORY_TURNS);

    let request = session.store().build_request(1, "P").await;
    let history = &request[1..];
    // Most recent 10 exchanges survive, oldest first.
    assert_eq!(history[0], ChatMessage::user("message 15"));
    assert_eq!(history[1], ChatMessage::assistant("echo: message 15"));
    assert_eq!(history[19], ChatMessage::assistant("echo: message 24"));
}

#[tokio::test]
async fn reset_clears_history_for_that_user_only() {
    let session = session_with(Arc::new(EchoLlmClient));

    for i in 0..5 {
        session.respond(1, &format!("a{i}")).await.unwrap();
        session.respond(2, &format!("b{i}")).await.unwrap();
    }

    session.reset(1).await;

    assert_eq!(session.store().len(1).await, 0);
    assert_eq!(session.store().len(2).await, 10);

    // Next request for the cleared user carries only the system turn.
    let request = session.store().build_request(1, "P").await;
    assert_eq!(request, vec![ChatMessage::system("P")]);
}

#[tokio::test]
async fn interleaved_users_stay_isolated() {
    let session = session_with(Arc::new(EchoLlmClient));

    session.respond(1, "alice 1").await.unwrap();
    session.respond(2, "bob 1").await.unwrap();
    session.respond(1, "alice 2").await.unwrap();
    session.respond(2, "bob 2").await.unwrap();

    for (user_id, name) in [(1, "alice"), (2, "bob")] {
        let request = session.store().build_request(user_id, "P").await;
        assert_eq!(request.len(), 5);
        assert!(request[1..]
            .iter()
            .all(|m| m.content.contains(name)));
    }
}
