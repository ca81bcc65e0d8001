//! Project metadata shown on the about screen and by `strictly_rps about`.

use tracing::instrument;

/// Display name of the game.
pub const PROJECT_NAME: &str = "Rock, Paper and Scissors Game";

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate authors.
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// One-paragraph description of the game.
pub const DESCRIPTION: &str = "A simple rock, paper and scissors game played in the terminal \
against the computer. This game follows the normal conventions of the game where the rock \
crushes the scissor, the paper covers the rock and the scissor cuts the paper.";

/// Renders the about text, one field per line.
#[instrument]
pub fn about_text() -> String {
    format!(
        "Project Name : {PROJECT_NAME}\n\
         Project Version : {VERSION}\n\
         Project Author : {AUTHOR}\n\
         Project Description : {DESCRIPTION}\n"
    )
}
