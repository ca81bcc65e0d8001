//! Winner consistency invariant: the recorded winner matches the scores.

use super::Invariant;
use crate::{MatchState, MatchStatus, Seat};

/// Invariant: a winner is recorded exactly when one score equals the target.
///
/// - No winner while both scores are below target
/// - The recorded winner holds the target score
/// - The loser is strictly below target
pub struct WinnerConsistentInvariant;

impl Invariant<MatchState> for WinnerConsistentInvariant {
    fn holds(game: &MatchState) -> bool {
        let target = game.target_rounds();
        let scores = game.scores();

        match game.winner() {
            None => scores.first < target && scores.second < target,
            Some(seat) => {
                scores.get(seat) == target && scores.get(seat.opponent()) < target
            }
        }
    }

    fn description() -> &'static str {
        "Winner must be recorded exactly when one score reaches the target"
    }
}

impl WinnerConsistentInvariant {
    /// Checks that a computed status agrees with the recorded winner.
    pub fn agrees(game: &MatchState, status: MatchStatus) -> bool {
        status.winner() == game.winner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_holds_through_a_full_match() {
        let mut game = MatchState::start_with_rng(1, &mut StdRng::seed_from_u64(3)).unwrap();
        assert!(WinnerConsistentInvariant::holds(&game));

        game.set_move(Seat::First, Move::Scissor).unwrap();
        game.set_move(Seat::Second, Move::Rock).unwrap();
        game.resolve_round().unwrap();

        assert!(WinnerConsistentInvariant::holds(&game));
        assert_eq!(game.winner(), Some(Seat::Second));
        assert!(WinnerConsistentInvariant::agrees(&game, game.check_match_end()));
    }

    #[test]
    fn test_detects_unrecorded_winner() {
        let mut game = MatchState::start_with_rng(2, &mut StdRng::seed_from_u64(3)).unwrap();
        game.scores.first = 2;
        game.rounds_played = 2;
        assert!(!WinnerConsistentInvariant::holds(&game));
    }
}
