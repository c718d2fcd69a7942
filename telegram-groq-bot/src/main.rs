//! Binary entry point.

use anyhow::Result;
use clap::Parser;
use telegram_groq_bot::{run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => run_bot(token).await,
    }
}
