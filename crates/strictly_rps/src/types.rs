//! Core domain types for rock-paper-scissors.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A hand shape thrown in a round.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Move {
    /// Rock crushes scissor.
    Rock,
    /// Paper covers rock.
    Paper,
    /// Scissor cuts paper.
    Scissor,
}

impl Move {
    /// Every move, in menu order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissor];

    /// Returns the move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissor,
            Move::Scissor => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    /// Returns the move that defeats this one.
    pub fn loses_to(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissor,
            Move::Scissor => Move::Rock,
        }
    }

    /// Returns the hand glyph used by the terminal UI.
    pub fn glyph(self) -> &'static str {
        match self {
            Move::Rock => "\u{270a}",
            Move::Paper => "\u{270b}",
            Move::Scissor => "\u{270c}",
        }
    }
}

/// One of the two seats at the table.
///
/// The human always sits in [`Seat::First`]; the computer takes
/// [`Seat::Second`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Seat {
    /// Player 1.
    #[strum(serialize = "first")]
    First,
    /// Player 2.
    #[strum(serialize = "second")]
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Screen half occupied by the computer for the length of a match.
///
/// Purely a presentation label; round resolution never reads it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Side {
    /// Left pane.
    #[strum(serialize = "left")]
    Left,
    /// Right pane.
    #[strum(serialize = "right")]
    Right,
}

impl Side {
    /// Returns the opposite pane.
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_each_move_beats_exactly_one_other() {
        for mv in Move::iter() {
            assert_ne!(mv.beats(), mv);
            assert_ne!(mv.loses_to(), mv);
            assert_ne!(mv.beats(), mv.loses_to());
            assert_eq!(mv.beats().loses_to(), mv);
        }
    }

    #[test]
    fn test_all_matches_iteration_order() {
        assert_eq!(Move::iter().collect::<Vec<_>>(), Move::ALL.to_vec());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Move::Scissor.to_string(), "Scissor");
        assert_eq!(Seat::First.to_string(), "first");
        assert_eq!(Side::Right.to_string(), "right");
    }

    #[test]
    fn test_opposites_are_involutions() {
        for seat in Seat::iter() {
            assert_eq!(seat.opponent().opponent(), seat);
        }
        for side in Side::iter() {
            assert_ne!(side.opposite(), side);
            assert_eq!(side.opposite().opposite(), side);
        }
    }
}
