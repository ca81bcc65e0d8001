//! Rock, Paper and Scissors: terminal front end for the `strictly_rps` engine.
//!
//! This crate holds everything around the pure game logic:
//!
//! - **Config**: optional TOML settings (`strictly_rps.toml`) for delays,
//!   the prompt's pre-filled round count, and the log file
//! - **Players**: the [`Player`] trait picking moves for the computer seat
//! - **TUI**: a screen state machine (start, about, rounds prompt,
//!   playground, ending) driven by [`GameController`]
//!
//! # Example
//!
//! ```no_run
//! use strictly_rps_app::{GameConfig, run_tui};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::load_or_default("strictly_rps.toml")?;
//! run_tui(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod about;
mod config;
mod players;
pub mod tui;

pub use about::{AUTHOR, DESCRIPTION, PROJECT_NAME, VERSION, about_text};
pub use config::{DEFAULT_CONFIG_PATH, GameConfig};
pub use players::{ComputerPlayer, Player, ScriptedPlayer};
pub use tui::{GameController, Screen, ScreenKind, ScreenTransition, parse_rounds, run_tui};
