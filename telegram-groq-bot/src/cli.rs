//! Command line interface.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "telegram-groq-bot",
    about = "Telegram chatbot backed by Groq chat completions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}
