//! Opponent replaying a fixed sequence of moves.

use super::Player;
use std::collections::VecDeque;
use strictly_rps::{MatchState, Move};
use tracing::{debug, warn};

/// Plays a predetermined list of moves, then repeats the last one.
pub struct ScriptedPlayer {
    name: String,
    moves: VecDeque<Move>,
    fallback: Move,
}

impl ScriptedPlayer {
    /// Creates a scripted player.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Move>) -> Self {
        let moves: VecDeque<Move> = moves.into_iter().collect();
        let fallback = moves.back().copied().unwrap_or(Move::Rock);
        Self {
            name: name.into(),
            moves,
            fallback,
        }
    }
}

impl Player for ScriptedPlayer {
    fn choose(&mut self, _game: &MatchState) -> Move {
        match self.moves.pop_front() {
            Some(mv) => {
                debug!(player = %self.name, %mv, "Scripted move");
                mv
            }
            None => {
                warn!(player = %self.name, mv = %self.fallback, "Script exhausted, repeating last move");
                self.fallback
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
