use thiserror::Error;

/// Startup configuration failures. Anything here is fatal: the condition
/// is logged and the process exits without starting the dispatcher.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TELEGRAM_BOT_TOKEN not set in environment")]
    MissingBotToken,
}
