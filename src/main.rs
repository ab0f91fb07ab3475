use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use tracing::debug;

use headliner::cli::{Cli, Commands};
use headliner::commands::{handle_generate, handle_latest, handle_serve, handle_vocab};
use headliner::{init_logging, AppConfig, LogConfig};

#[actix_web::main]
async fn main() -> Result<()> {
    // A missing .env is fine; system environment still applies
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let cli = Cli::parse();
    let start = Instant::now();

    init_logging(LogConfig::from_env())?;
    debug!(dotenv_loaded, "Environment loaded");

    // Only commands that touch the API or sheets load config
    let load_config = || AppConfig::load(cli.config.as_deref());

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Serve { bind } => handle_serve(&load_config()?, bind.as_deref()).await,
        Commands::Generate {
            user,
            topic,
            format,
            trigger,
            tone,
        } => {
            let config = load_config()?;
            handle_generate(&config, &user, &topic, &format, &trigger, &tone, start).await
        }
        Commands::Latest { user } => handle_latest(&load_config()?, &user, start).await,
        Commands::Vocab => {
            handle_vocab();
            Ok(())
        }
    }
}
