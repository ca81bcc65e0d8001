//! Round rules for rock-paper-scissors.
//!
//! Pure functions mapping a pair of simultaneous moves to an outcome
//! and to the sentence announcing it. Kept apart from match state so
//! contracts and tests can reason about them directly.

use super::types::{Move, Seat};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of comparing two moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Both players threw the same move.
    Tie,
    /// The first argument won.
    FirstPlayerWins,
    /// The second argument won.
    SecondPlayerWins,
}

impl Outcome {
    /// Returns the winning seat, if any.
    pub fn winner(self) -> Option<Seat> {
        match self {
            Outcome::Tie => None,
            Outcome::FirstPlayerWins => Some(Seat::First),
            Outcome::SecondPlayerWins => Some(Seat::Second),
        }
    }

    /// Returns the outcome seen from the other side of the table.
    pub fn swapped(self) -> Self {
        match self {
            Outcome::Tie => Outcome::Tie,
            Outcome::FirstPlayerWins => Outcome::SecondPlayerWins,
            Outcome::SecondPlayerWins => Outcome::FirstPlayerWins,
        }
    }

    /// Returns true for a tie.
    pub fn is_tie(self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Tie => write!(f, "Tie"),
            Outcome::FirstPlayerWins => write!(f, "First player wins"),
            Outcome::SecondPlayerWins => write!(f, "Second player wins"),
        }
    }
}

/// Sentence announced for a tied round.
pub const TIE_CAUSE: &str = "It's a tie";

/// Decides a round.
///
/// Rock beats scissor, scissor beats paper, paper beats rock, and equal
/// moves tie.
#[instrument(level = "trace")]
pub fn resolve(first: Move, second: Move) -> Outcome {
    match (first, second) {
        (a, b) if a == b => Outcome::Tie,
        (Move::Rock, Move::Scissor)
        | (Move::Scissor, Move::Paper)
        | (Move::Paper, Move::Rock) => Outcome::FirstPlayerWins,
        _ => Outcome::SecondPlayerWins,
    }
}

/// Returns the sentence explaining how a round was decided.
#[instrument(level = "trace")]
pub fn cause(first: Move, second: Move) -> &'static str {
    let winning = match resolve(first, second) {
        Outcome::Tie => return TIE_CAUSE,
        Outcome::FirstPlayerWins => first,
        Outcome::SecondPlayerWins => second,
    };
    match winning {
        Move::Paper => "Paper covers Rock",
        Move::Rock => "Rock crushes Scissor",
        Move::Scissor => "Scissor cuts Paper",
    }
}
