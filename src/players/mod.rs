//! Player trait and implementations.

mod computer;
mod scripted;

pub use computer::ComputerPlayer;
pub use scripted::ScriptedPlayer;

use strictly_rps::{MatchState, Move};

/// Something that can pick a move for the second seat.
pub trait Player: Send {
    /// Chooses a move for the current round.
    fn choose(&mut self, game: &MatchState) -> Move;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
