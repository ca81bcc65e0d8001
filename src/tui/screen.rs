//! Screen trait and transition type for the game's screen state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use strictly_rps::Move;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`GameController`](super::GameController) state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Navigate to the start screen.
    GoToStart,
    /// Navigate to the about screen.
    GoToAbout,
    /// Navigate to the round-count prompt.
    GoToRoundsPrompt,
    /// Begin a match played to the given number of wins.
    StartMatch {
        /// Wins needed to take the match.
        target_rounds: u32,
    },
    /// The human locked in a move for the current round.
    SubmitMove(Move),
    /// Play another match with the same target.
    Replay,
    /// Exit the game.
    Quit,
}

/// Trait implemented by each screen in the state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
