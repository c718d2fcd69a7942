//! # Telegram Groq bot
//!
//! Wires teloxide, the conversation store, and the LLM client into one
//! process: env config, tracing, slash commands (`/start`, `/help`,
//! `/clear`) and the catch-all chat flow.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logger;
pub mod run;
pub mod session;

pub use cli::{Cli, Commands};
pub use config::BotConfig;
pub use error::ConfigError;
pub use run::run_bot;
pub use session::ChatSession;
