//! Values the engine hands back to its caller after each round.

use super::rules::Outcome;
use super::types::{Move, Seat};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Running score for both seats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    /// Rounds won by the first seat.
    pub first: u32,
    /// Rounds won by the second seat.
    pub second: u32,
}

impl Scores {
    /// Returns the score for a seat.
    pub fn get(&self, seat: Seat) -> u32 {
        match seat {
            Seat::First => self.first,
            Seat::Second => self.second,
        }
    }

    /// Awards one round to a seat.
    pub(crate) fn award(&mut self, seat: Seat) {
        match seat {
            Seat::First => self.first += 1,
            Seat::Second => self.second += 1,
        }
    }

    /// Total rounds won by either seat.
    pub fn total(&self) -> u32 {
        self.first + self.second
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// Everything the presentation layer needs to announce a resolved round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct RoundResult {
    /// One-based round number, ties included.
    round: u32,
    /// Move thrown from the first seat.
    first_move: Move,
    /// Move thrown from the second seat.
    second_move: Move,
    /// Who took the round.
    outcome: Outcome,
    /// Sentence explaining the outcome.
    cause: &'static str,
    /// Scores after this round was counted.
    scores: Scores,
}

impl RoundResult {
    /// Returns the one-based round number.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Returns the move thrown by a seat.
    pub fn move_of(&self, seat: Seat) -> Move {
        match seat {
            Seat::First => self.first_move,
            Seat::Second => self.second_move,
        }
    }

    /// Returns who took the round.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the sentence explaining the outcome.
    pub fn cause(&self) -> &'static str {
        self.cause
    }

    /// Returns the scores after this round.
    pub fn scores(&self) -> Scores {
        self.scores
    }
}

/// Whether the match can continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Neither seat has reached the target yet.
    InProgress,
    /// A seat reached the target first.
    Finished(Seat),
}

impl MatchStatus {
    /// Returns the match winner, if decided.
    pub fn winner(self) -> Option<Seat> {
        match self {
            MatchStatus::InProgress => None,
            MatchStatus::Finished(seat) => Some(seat),
        }
    }

    /// Returns true once a winner is recorded.
    pub fn is_finished(self) -> bool {
        matches!(self, MatchStatus::Finished(_))
    }
}
