//! Process wiring: logging, config, LLM client, chat session, dispatcher.

use anyhow::{Context, Result};
use chrono::Local;
use conversation::ConversationStore;
use llm_client::{mask_token, EnvLlmConfig, LlmClient, OpenAILlmClient};
use std::sync::Arc;
use teloxide::{
    dispatching::UpdateFilterExt, dptree, error_handlers::LoggingErrorHandler, prelude::*,
    types::Update,
};
use tracing::{error, info};

use crate::config::BotConfig;
use crate::handlers;
use crate::logger::init_tracing;
use crate::session::ChatSession;

/// Main entry: init logging, load config (missing bot token is fatal and
/// logged), build the LLM client and chat session, then run the
/// dispatcher with long polling until shutdown.
pub async fn run_bot(token_override: Option<String>) -> Result<()> {
    std::fs::create_dir_all("logs").context("Failed to create logs directory")?;
    init_tracing(&BotConfig::log_file_from_env())?;

    let config = match BotConfig::load(token_override) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration error; bot not started");
            return Err(e.into());
        }
    };

    let llm_cfg = EnvLlmConfig::from_env();
    info!(
        start_time = %Local::now().format("%Y-%m-%d %H:%M:%S"),
        model = %llm_cfg.model,
        base_url = %llm_cfg.base_url,
        api_key = %mask_token(&llm_cfg.api_key),
        "Initializing bot"
    );

    let llm: Arc<dyn LlmClient> = Arc::new(
        OpenAILlmClient::with_base_url(llm_cfg.api_key.clone(), llm_cfg.base_url.clone())
            .with_model(llm_cfg.model.clone())
            .with_temperature(llm_cfg.temperature)
            .with_max_tokens(llm_cfg.max_tokens),
    );
    let system_prompt = llm_cfg
        .system_prompt
        .clone()
        .unwrap_or_else(|| prompt::DEFAULT_SYSTEM_MESSAGE.to_string());
    let session = Arc::new(ChatSession::new(ConversationStore::new(), llm, system_prompt));

    let bot = Bot::new(config.bot_token.clone());
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = me.user.username.as_deref() {
            info!(username = %username, "Bot authenticated");
        }
    }

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::message_handler));

    info!("Bot started successfully");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![session])
        .default_handler(|upd| async move {
            tracing::debug!(update = ?upd, "Unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error in update handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}
