//! Rock, Paper and Scissors - terminal game binary.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use strictly_rps_app::{GameConfig, about_text, run_tui};
use tracing::instrument;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_play(args).await,
        Command::About => {
            print!("{}", about_text());
            Ok(())
        }
    }
}

/// Loads the config file, applies CLI overrides and starts the TUI.
#[instrument]
async fn run_play(args: PlayArgs) -> Result<()> {
    let mut config = GameConfig::load_or_default(&args.config)?;
    if let Some(rounds) = args.rounds {
        config = config.with_default_rounds(Some(rounds));
    }
    if let Some(log_file) = args.log_file {
        config = config.with_log_file(log_file);
    }
    run_tui(config).await
}
