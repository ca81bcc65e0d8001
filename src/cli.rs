//! Command-line interface for strictly_rps.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use strictly_rps_app::DEFAULT_CONFIG_PATH;

/// Rock, Paper and Scissors - play against the computer in your terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_rps")]
#[command(about = "Rock, paper and scissors against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the terminal game
    Play(PlayArgs),

    /// Print project name, version, author and description
    About,
}

/// Options for the `play` command.
#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Round count pre-filled into the prompt
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: Option<u32>,

    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// File receiving log output, overriding the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            rounds: None,
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            log_file: None,
        }
    }
}
