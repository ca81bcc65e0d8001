//! Score bounds invariant: both scores stay within `[0, target]`.

use super::Invariant;
use crate::MatchState;

/// Invariant: no score ever exceeds the round target.
///
/// Scores are unsigned, so only the upper bound needs checking.
/// The round count must also cover every round won.
pub struct ScoreBoundsInvariant;

impl Invariant<MatchState> for ScoreBoundsInvariant {
    fn holds(game: &MatchState) -> bool {
        let scores = game.scores();
        let target = game.target_rounds();

        scores.first <= target
            && scores.second <= target
            && scores.total() <= game.rounds_played()
    }

    fn description() -> &'static str {
        "Scores must stay within the round target"
    }
}
