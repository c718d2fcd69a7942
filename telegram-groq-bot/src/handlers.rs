//! Telegram message handling: the slash-command surface and the chat flow.

use std::sync::Arc;
use teloxide::{prelude::*, types::ChatAction};
use tracing::{debug, error, info};

use crate::session::ChatSession;

/// Fixed reply when the inference call fails. The stored history is left
/// unmodified on this path.
pub const APOLOGY: &str =
    "Sorry, I encountered an error processing your message. Please try again!";

/// Reply to `/clear`.
pub const CLEARED: &str = "✅ Conversation history cleared!";

pub const HELP_TEXT: &str = "AI Chatbot Help\n\n\
    Just send me any message and I'll respond using AI!\n\n\
    Commands:\n\
    /start - Start the bot\n\
    /clear - Clear conversation history\n\
    /help - Show this message";

pub const UNKNOWN_COMMAND: &str = "Unknown command. Send /help to see what I can do.";

/// Greeting for `/start`.
pub fn greeting(first_name: &str) -> String {
    format!(
        "Hi {first_name}! 👋\n\n\
         I'm an AI assistant. Ask me anything and I'll do my best to help!\n\n\
         Commands:\n\
         /start - Start the bot\n\
         /clear - Clear conversation history\n\
         /help - Show this message"
    )
}

/// First whitespace token if the text is a slash command, with any
/// `@botname` suffix removed. Text with a slash elsewhere is not a command.
pub(crate) fn parse_command(text: &str) -> Option<&str> {
    let first = text.split_whitespace().next()?;
    if !first.starts_with('/') {
        return None;
    }
    Some(first.split('@').next().unwrap_or(first))
}

/// Dispatcher endpoint for inbound messages. Command or chat; everything
/// else is ignored. Errors from the inference path never escape here.
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    session: Arc<ChatSession>,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        debug!(chat_id = msg.chat.id.0, "Ignoring non-text message");
        return Ok(());
    };
    let user_id = msg.from.as_ref().map(|u| u.id.0 as i64).unwrap_or(0);

    match parse_command(text) {
        Some("/start") => {
            let first_name = msg
                .from
                .as_ref()
                .map(|u| u.first_name.as_str())
                .unwrap_or("there");
            info!(user_id, "Handling /start");
            bot.send_message(msg.chat.id, greeting(first_name)).await?;
        }
        Some("/help") => {
            info!(user_id, "Handling /help");
            bot.send_message(msg.chat.id, HELP_TEXT).await?;
        }
        Some("/clear") => {
            session.reset(user_id).await;
            bot.send_message(msg.chat.id, CLEARED).await?;
        }
        Some(command) => {
            info!(user_id, command, "Unknown command");
            bot.send_message(msg.chat.id, UNKNOWN_COMMAND).await?;
        }
        None => {
            info!(user_id, message_content = %text, "Received message");
            bot.send_chat_action(msg.chat.id, ChatAction::Typing).await?;

            match session.respond(user_id, text).await {
                Ok(reply) => {
                    bot.send_message(msg.chat.id, reply).await?;
                    info!(user_id, "Sent LLM response");
                }
                Err(e) => {
                    error!(user_id, error = %e, "Error generating response");
                    bot.send_message(msg.chat.id, APOLOGY).await?;
                }
            }
        }
    }

    Ok(())
}
