//! Bot configuration from environment variables.

use std::env;

use crate::error::ConfigError;

pub const DEFAULT_LOG_FILE: &str = "logs/telegram-groq-bot.log";

/// Telegram-side process configuration. LLM settings live in
/// `llm_client::EnvLlmConfig`.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub log_file: String,
}

impl BotConfig {
    /// Loads from environment variables. If `token` is provided it
    /// overrides TELEGRAM_BOT_TOKEN. A missing or empty token is the one
    /// startup-fatal condition.
    pub fn load(token: Option<String>) -> Result<Self, ConfigError> {
        let bot_token = token
            .or_else(|| env::var("TELEGRAM_BOT_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingBotToken)?;
        Ok(Self {
            bot_token,
            log_file: Self::log_file_from_env(),
        })
    }

    /// Log file path; readable before full config load so startup errors
    /// can be logged to the right place.
    pub fn log_file_from_env() -> String {
        env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
    }
}
