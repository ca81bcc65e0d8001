//! Contract-based validation for round resolution.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::error::EngineError;
use super::invariants::{InvariantSet, MatchInvariants, WinnerConsistentInvariant};
use super::{MatchState, Seat};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state)} - must hold before the transition
/// - Postcondition: {Q(before, after)} - must hold after the transition
pub trait Contract<S> {
    /// Checks preconditions before the transition.
    fn pre(state: &S) -> Result<(), EngineError>;

    /// Checks postconditions after the transition.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

// ─────────────────────────────────────────────────────────────
//  Round Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the match has no winner yet.
pub struct MatchOpen;

impl MatchOpen {
    /// Fails with [`EngineError::MatchFinished`] once a winner is recorded.
    #[instrument(skip(game))]
    pub fn check(game: &MatchState) -> Result<(), EngineError> {
        if game.winner().is_some() {
            Err(EngineError::MatchFinished)
        } else {
            Ok(())
        }
    }
}

/// Precondition: both seats have chosen a move.
pub struct MovesPresent;

impl MovesPresent {
    /// Fails with [`EngineError::MissingMove`] for the first seat without a move.
    #[instrument(skip(game))]
    pub fn check(game: &MatchState) -> Result<(), EngineError> {
        for seat in [Seat::First, Seat::Second] {
            if game.pending_move(seat).is_none() {
                return Err(EngineError::MissingMove(seat));
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Round Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for resolving a round.
///
/// Preconditions:
/// - Match is still open
/// - Both moves are present
///
/// Postconditions:
/// - Match invariants hold
/// - Recorded winner agrees with the computed status
/// - Target and computer side are untouched
/// - At most one point was awarded
/// - Both moves are cleared
pub struct RoundContract;

impl Contract<MatchState> for RoundContract {
    fn pre(game: &MatchState) -> Result<(), EngineError> {
        MatchOpen::check(game)?;
        MovesPresent::check(game)
    }

    fn post(before: &MatchState, after: &MatchState) -> Result<(), EngineError> {
        let mut failures = match MatchInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations.into_iter().map(|v| v.description).collect(),
        };

        if !WinnerConsistentInvariant::agrees(after, after.check_match_end()) {
            failures.push("Recorded winner disagrees with match status".to_string());
        }
        if after.target_rounds() != before.target_rounds() {
            failures.push("Round target changed mid-match".to_string());
        }
        if after.computer_side() != before.computer_side() {
            failures.push("Computer side changed mid-match".to_string());
        }
        if after.scores().total() > before.scores().total() + 1 {
            failures.push("More than one point awarded in a round".to_string());
        }
        if after.pending_move(Seat::First).is_some() || after.pending_move(Seat::Second).is_some() {
            failures.push("Moves were not cleared after the round".to_string());
        }

        if failures.is_empty() {
            Ok(())
        } else {
            let descriptions = failures.join("; ");
            warn!(%descriptions, "Round postcondition failed");
            Err(EngineError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Side};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fresh() -> MatchState {
        MatchState::start_with_rng(3, &mut StdRng::seed_from_u64(11)).unwrap()
    }

    #[test]
    fn test_precondition_requires_both_moves() {
        let mut game = fresh();
        assert_eq!(
            RoundContract::pre(&game),
            Err(EngineError::MissingMove(Seat::First))
        );

        game.set_move(Seat::First, Move::Rock).unwrap();
        assert_eq!(
            RoundContract::pre(&game),
            Err(EngineError::MissingMove(Seat::Second))
        );

        game.set_move(Seat::Second, Move::Paper).unwrap();
        assert!(RoundContract::pre(&game).is_ok());
    }

    #[test]
    fn test_precondition_rejects_finished_match() {
        let mut game = fresh();
        game.scores.first = 3;
        game.rounds_played = 3;
        game.winner = Some(Seat::First);
        assert_eq!(MatchOpen::check(&game), Err(EngineError::MatchFinished));
    }

    #[test]
    fn test_postcondition_holds_after_round() {
        let mut game = fresh();
        let before = game.clone();
        game.set_move(Seat::First, Move::Paper).unwrap();
        game.set_move(Seat::Second, Move::Rock).unwrap();
        game.resolve_round().unwrap();
        assert!(RoundContract::post(&before, &game).is_ok());
    }

    #[test]
    fn test_postcondition_detects_side_swap() {
        let before = fresh();
        let mut after = before.clone();
        after.computer_side = match before.computer_side() {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        };
        assert!(matches!(
            RoundContract::post(&before, &after),
            Err(EngineError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_stale_moves() {
        let before = fresh();
        let mut after = before.clone();
        after.first_move = Some(Move::Rock);
        assert!(RoundContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_unrecorded_winner() {
        let before = fresh();
        let mut after = before.clone();
        after.scores.first = 1;
        after.rounds_played = 1;
        after.target_rounds = 1;

        match RoundContract::post(&before, &after) {
            Err(EngineError::InvariantViolation(msg)) => {
                assert!(msg.contains("disagrees with match status"), "{msg}");
            }
            other => panic!("expected invariant violation, got {other:?}"),
        }
    }
}
