//! Terminal UI for the rock-paper-scissors game.

mod controller;
mod screen;
mod screens;

pub use controller::{GameController, ScreenKind};
pub use screen::{Screen, ScreenTransition};
pub use screens::{
    AboutScreen, EndingScreen, EndingStage, Phase, PlaygroundScreen, RoundsInputError,
    RoundsScreen, StartScreen, Tone, parse_rounds,
};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument, warn};

use crate::config::GameConfig;
use crate::players::ComputerPlayer;

/// Default tracing filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,strictly_rps=debug,strictly_rps_app=debug";

/// Routes tracing output to the configured log file so it stays off the
/// alternate screen.
fn init_logging(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the game in the terminal until the user quits.
#[instrument(skip(config))]
pub async fn run_tui(config: GameConfig) -> Result<()> {
    init_logging(&config)?;
    info!(?config, "Starting Rock, Paper and Scissors TUI");

    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            error!(error = %e, "Terminal setup failed");
            if let Err(restore) = restore_terminal(None) {
                warn!(error = %format!("{restore:#}"), "Terminal restore after failed setup also failed");
            }
            return Err(e);
        }
    };

    let mut controller = GameController::new(config, Box::new(ComputerPlayer::new("Computer")));
    let result = controller.run(&mut terminal).await;

    if let Err(e) = &result {
        error!(error = %e, "Game loop failed");
    }
    let restored = restore_terminal(Some(&mut terminal));
    if let Err(e) = &restored {
        error!(error = %format!("{e:#}"), "Terminal restore failed");
    }
    result.and(restored)
}

type TuiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Switches to raw mode and the alternate screen.
fn enter_terminal() -> Result<TuiTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Runs every restore step, even when an earlier one fails.
///
/// Returns the first failure, with any later ones logged.
fn restore_terminal(terminal: Option<&mut TuiTerminal>) -> Result<()> {
    let mut failures: Vec<anyhow::Error> = Vec::new();

    if let Err(e) = disable_raw_mode() {
        failures.push(e.into());
    }
    let left = match terminal {
        Some(terminal) => {
            let left = execute!(terminal.backend_mut(), LeaveAlternateScreen);
            if let Err(e) = terminal.show_cursor() {
                failures.push(e.into());
            }
            left
        }
        None => execute!(io::stdout(), LeaveAlternateScreen),
    };
    if let Err(e) = left {
        failures.push(e.into());
    }

    combine_failures(failures)
}

/// Folds restore failures into one error, keeping the first as the cause.
fn combine_failures(failures: Vec<anyhow::Error>) -> Result<()> {
    let mut failures = failures.into_iter();
    let Some(first) = failures.next() else {
        return Ok(());
    };
    let rest: Vec<String> = failures.map(|e| e.to_string()).collect();
    if rest.is_empty() {
        return Err(first.context("Failed to restore terminal"));
    }
    warn!(others = %rest.join("; "), "Additional terminal restore failures");
    Err(first.context(format!(
        "Failed to restore terminal ({} further failures: {})",
        rest.len(),
        rest.join("; ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_failures_is_ok() {
        assert!(combine_failures(Vec::new()).is_ok());
    }

    #[test]
    fn test_all_failures_reported() {
        let err = combine_failures(vec![
            anyhow::anyhow!("raw mode stuck"),
            anyhow::anyhow!("cursor hidden"),
        ])
        .unwrap_err();

        let report = format!("{err:#}");
        assert!(report.contains("raw mode stuck"), "{report}");
        assert!(report.contains("cursor hidden"), "{report}");
    }
}
