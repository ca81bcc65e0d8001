//! Positive target invariant: a match always plays toward at least one win.

use super::Invariant;
use crate::MatchState;

/// Invariant: the round target is never zero.
pub struct PositiveTargetInvariant;

impl Invariant<MatchState> for PositiveTargetInvariant {
    fn holds(game: &MatchState) -> bool {
        game.target_rounds() > 0
    }

    fn description() -> &'static str {
        "Round target must be positive"
    }
}
