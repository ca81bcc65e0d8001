//! Match engine for rock-paper-scissors.
//!
//! A [`MatchState`] is exclusively owned by whatever drives the match.
//! Each round follows the same cycle:
//!
//! 1. Both seats record a move with [`MatchState::set_move`]
//! 2. [`MatchState::resolve_round`] scores the round and clears the moves
//! 3. The engine checks whether a score reached the target
//!
//! Replaying a match builds a fresh state with [`MatchState::restart`]
//! rather than resetting fields in place.

use super::contracts::{Contract, RoundContract};
use super::error::{ConfigError, EngineError};
use super::invariants::{InvariantSet, MatchInvariants};
use super::round::{MatchStatus, RoundResult, Scores};
use super::rules::{cause, resolve};
use super::types::{Move, Seat, Side};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Picks a move uniformly at random, independent of any earlier pick.
#[instrument(skip(rng))]
pub fn generate_computer_move<R: Rng + ?Sized>(rng: &mut R) -> Move {
    let mv = Move::ALL[rng.gen_range(0..Move::ALL.len())];
    debug!(%mv, "Computer move generated");
    mv
}

/// Mutable state of a single match.
///
/// Deserialized states are validated like freshly started ones: a zero
/// target or a state breaking [`MatchInvariants`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatchStateRepr")]
pub struct MatchState {
    pub(crate) scores: Scores,
    pub(crate) target_rounds: u32,
    pub(crate) first_move: Option<Move>,
    pub(crate) second_move: Option<Move>,
    pub(crate) computer_side: Side,
    pub(crate) winner: Option<Seat>,
    pub(crate) rounds_played: u32,
}

/// Unchecked wire form of [`MatchState`].
#[derive(Deserialize)]
struct MatchStateRepr {
    scores: Scores,
    target_rounds: u32,
    first_move: Option<Move>,
    second_move: Option<Move>,
    computer_side: Side,
    winner: Option<Seat>,
    rounds_played: u32,
}

impl TryFrom<MatchStateRepr> for MatchState {
    type Error = ConfigError;

    fn try_from(repr: MatchStateRepr) -> Result<Self, Self::Error> {
        if repr.target_rounds == 0 {
            return Err(ConfigError::new("Round target must be a positive integer"));
        }

        let game = Self {
            scores: repr.scores,
            target_rounds: repr.target_rounds,
            first_move: repr.first_move,
            second_move: repr.second_move,
            computer_side: repr.computer_side,
            winner: repr.winner,
            rounds_played: repr.rounds_played,
        };

        if let Err(violations) = MatchInvariants::check_all(&game) {
            let descriptions: Vec<String> =
                violations.into_iter().map(|v| v.description).collect();
            warn!(descriptions = %descriptions.join("; "), "Rejected match state");
            return Err(ConfigError::new(format!(
                "Invalid match state: {}",
                descriptions.join("; ")
            )));
        }
        if game.winner.is_some() && (game.first_move.is_some() || game.second_move.is_some()) {
            return Err(ConfigError::new(
                "Invalid match state: finished match has pending moves",
            ));
        }
        Ok(game)
    }
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl MatchState {
    /// Starts a match played to `target_rounds` wins.
    ///
    /// The computer side is drawn from the thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `target_rounds` is zero.
    #[instrument]
    pub fn start(target_rounds: u32) -> Result<Self, ConfigError> {
        Self::start_with_rng(target_rounds, &mut rand::thread_rng())
    }

    /// Starts a match, drawing the computer side from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `target_rounds` is zero.
    #[instrument(skip(rng))]
    pub fn start_with_rng<R: Rng + ?Sized>(
        target_rounds: u32,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if target_rounds == 0 {
            return Err(ConfigError::new("Round target must be a positive integer"));
        }

        let fresh = Self::drawn(target_rounds, rng);
        info!(target_rounds, computer_side = %fresh.computer_side, "Match started");
        Ok(fresh)
    }

    /// Builds an empty match with a randomly drawn computer side.
    fn drawn<R: Rng + ?Sized>(target_rounds: u32, rng: &mut R) -> Self {
        let computer_side = if rng.gen_bool(0.5) {
            Side::Right
        } else {
            Side::Left
        };

        Self {
            scores: Scores::default(),
            target_rounds,
            first_move: None,
            second_move: None,
            computer_side,
            winner: None,
            rounds_played: 0,
        }
    }

    /// Starts a new match with the same target and a freshly drawn side.
    #[instrument(skip(self), fields(target_rounds = self.target_rounds))]
    pub fn restart(&self) -> Self {
        self.restart_with_rng(&mut rand::thread_rng())
    }

    /// Like [`MatchState::restart`], drawing the side from `rng`.
    pub fn restart_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let fresh = Self::drawn(self.target_rounds, rng);
        info!(target_rounds = fresh.target_rounds, computer_side = %fresh.computer_side, "Match restarted");
        fresh
    }
}

// ─────────────────────────────────────────────────────────────
//  Round cycle
// ─────────────────────────────────────────────────────────────

impl MatchState {
    /// Records the move for a seat, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MatchFinished`] once a winner is recorded.
    #[instrument(skip(self))]
    pub fn set_move(&mut self, seat: Seat, mv: Move) -> Result<(), EngineError> {
        if self.winner.is_some() {
            return Err(EngineError::MatchFinished);
        }
        match seat {
            Seat::First => self.first_move = Some(mv),
            Seat::Second => self.second_move = Some(mv),
        }
        Ok(())
    }

    /// Withdraws a seat's move before the round is resolved.
    #[instrument(skip(self))]
    pub fn clear_move(&mut self, seat: Seat) {
        match seat {
            Seat::First => self.first_move = None,
            Seat::Second => self.second_move = None,
        }
    }

    /// Scores the round from the two recorded moves.
    ///
    /// On a win the winning seat gains one point; a tie changes nothing.
    /// Both moves are cleared afterwards and the winner is recorded if a
    /// score reached the target.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingMove`] if either seat has not moved
    /// - [`EngineError::MatchFinished`] if the match is already decided
    /// - [`EngineError::InvariantViolation`] if a postcondition fails
    ///   (debug builds only)
    #[instrument(skip(self), fields(round = self.rounds_played + 1))]
    pub fn resolve_round(&mut self) -> Result<RoundResult, EngineError> {
        RoundContract::pre(self)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let (first, second) = match (self.first_move, self.second_move) {
            (Some(first), Some(second)) => (first, second),
            (None, _) => return Err(EngineError::MissingMove(Seat::First)),
            (_, None) => return Err(EngineError::MissingMove(Seat::Second)),
        };

        let outcome = resolve(first, second);
        if let Some(seat) = outcome.winner() {
            self.scores.award(seat);
        }
        self.rounds_played += 1;
        self.first_move = None;
        self.second_move = None;

        if let MatchStatus::Finished(seat) = self.check_match_end() {
            info!(winner = %seat, scores = %self.scores, "Match finished");
            self.winner = Some(seat);
        }

        #[cfg(debug_assertions)]
        RoundContract::post(&before, self)?;

        let result = RoundResult::new(
            self.rounds_played,
            first,
            second,
            outcome,
            cause(first, second),
            self.scores,
        );
        debug!(%first, %second, %outcome, scores = %self.scores, "Round resolved");
        Ok(result)
    }

    /// Reports whether either score has reached the target.
    ///
    /// Only one score changes per round, so both seats can never reach
    /// the target together.
    #[instrument(skip(self))]
    pub fn check_match_end(&self) -> MatchStatus {
        if self.scores.first == self.target_rounds {
            MatchStatus::Finished(Seat::First)
        } else if self.scores.second == self.target_rounds {
            MatchStatus::Finished(Seat::Second)
        } else {
            MatchStatus::InProgress
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Accessors
// ─────────────────────────────────────────────────────────────

impl MatchState {
    /// Returns both scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the score for one seat.
    pub fn score(&self, seat: Seat) -> u32 {
        self.scores.get(seat)
    }

    /// Returns the number of wins needed to take the match.
    pub fn target_rounds(&self) -> u32 {
        self.target_rounds
    }

    /// Returns the move recorded for a seat in the current round.
    pub fn pending_move(&self, seat: Seat) -> Option<Move> {
        match seat {
            Seat::First => self.first_move,
            Seat::Second => self.second_move,
        }
    }

    /// Returns the pane the computer occupies.
    pub fn computer_side(&self) -> Side {
        self.computer_side
    }

    /// Returns the pane the human occupies.
    pub fn human_side(&self) -> Side {
        self.computer_side.opposite()
    }

    /// Returns the match winner, once decided.
    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    /// Returns the number of rounds resolved so far, ties included.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the recorded match status.
    pub fn status(&self) -> MatchStatus {
        match self.winner {
            Some(seat) => MatchStatus::Finished(seat),
            None => MatchStatus::InProgress,
        }
    }

    /// Returns true once a winner is recorded.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fresh(target: u32) -> MatchState {
        MatchState::start_with_rng(target, &mut StdRng::seed_from_u64(42)).unwrap()
    }

    fn play(game: &mut MatchState, first: Move, second: Move) -> RoundResult {
        game.set_move(Seat::First, first).unwrap();
        game.set_move(Seat::Second, second).unwrap();
        game.resolve_round().unwrap()
    }

    #[test]
    fn test_start_initial_state() {
        let game = fresh(5);
        assert_eq!(game.scores(), Scores::default());
        assert_eq!(game.target_rounds(), 5);
        assert_eq!(game.pending_move(Seat::First), None);
        assert_eq!(game.pending_move(Seat::Second), None);
        assert_eq!(game.winner(), None);
        assert_eq!(game.rounds_played(), 0);
        assert_eq!(game.status(), MatchStatus::InProgress);
    }

    #[test]
    fn test_start_rejects_zero_target() {
        let err = MatchState::start(0).unwrap_err();
        assert!(err.message.contains("positive"));
    }

    #[test]
    fn test_set_move_does_not_resolve() {
        let mut game = fresh(3);
        game.set_move(Seat::First, Move::Rock).unwrap();
        game.set_move(Seat::First, Move::Paper).unwrap();
        assert_eq!(game.pending_move(Seat::First), Some(Move::Paper));
        assert_eq!(game.rounds_played(), 0);
        assert_eq!(game.scores(), Scores::default());
    }

    #[test]
    fn test_clear_move() {
        let mut game = fresh(3);
        game.set_move(Seat::Second, Move::Scissor).unwrap();
        game.clear_move(Seat::Second);
        assert_eq!(game.pending_move(Seat::Second), None);
    }

    #[test]
    fn test_resolve_clears_moves_for_every_outcome() {
        let mut game = fresh(10);
        for (a, b) in [
            (Move::Rock, Move::Rock),
            (Move::Rock, Move::Scissor),
            (Move::Rock, Move::Paper),
        ] {
            play(&mut game, a, b);
            assert_eq!(game.pending_move(Seat::First), None);
            assert_eq!(game.pending_move(Seat::Second), None);
        }
        assert_eq!(game.rounds_played(), 3);
        assert_eq!(game.scores(), Scores { first: 1, second: 1 });
    }

    #[test]
    fn test_second_seat_can_win_match() {
        let mut game = fresh(2);
        play(&mut game, Move::Rock, Move::Paper);
        let result = play(&mut game, Move::Paper, Move::Scissor);
        assert_eq!(result.outcome(), crate::Outcome::SecondPlayerWins);
        assert_eq!(result.cause(), "Scissor cuts Paper");
        assert_eq!(game.check_match_end(), MatchStatus::Finished(Seat::Second));
        assert_eq!(game.winner(), Some(Seat::Second));
    }

    #[test]
    fn test_finished_match_rejects_moves() {
        let mut game = fresh(1);
        play(&mut game, Move::Paper, Move::Rock);
        assert!(game.is_finished());
        assert_eq!(
            game.set_move(Seat::First, Move::Rock),
            Err(EngineError::MatchFinished)
        );
    }

    #[test]
    fn test_restart_keeps_target_and_resets_everything_else() {
        let mut game = fresh(2);
        play(&mut game, Move::Paper, Move::Rock);
        play(&mut game, Move::Paper, Move::Rock);
        assert!(game.is_finished());

        let replay = game.restart_with_rng(&mut StdRng::seed_from_u64(9));
        assert_eq!(replay.target_rounds(), 2);
        assert_eq!(replay.scores(), Scores::default());
        assert_eq!(replay.winner(), None);
        assert_eq!(replay.rounds_played(), 0);
    }

    #[test]
    fn test_computer_side_is_drawn_from_both_panes() {
        let mut rng = StdRng::seed_from_u64(2024);
        let sides: Vec<Side> = (0..64)
            .map(|_| MatchState::start_with_rng(1, &mut rng).unwrap().computer_side())
            .collect();
        assert!(sides.contains(&Side::Left));
        assert!(sides.contains(&Side::Right));
    }

    #[test]
    fn test_human_side_is_opposite() {
        let game = fresh(1);
        assert_ne!(game.human_side(), game.computer_side());
    }

    #[test]
    fn test_state_serializes() {
        let game = fresh(3);
        let json = serde_json::to_string(&game).unwrap();
        let back: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
    }

    #[test]
    fn test_deserialize_rejects_zero_target() {
        let mut json = serde_json::to_value(fresh(3)).unwrap();
        json["target_rounds"] = serde_json::json!(0);

        let err = serde_json::from_value::<MatchState>(json).unwrap_err();
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn test_deserialize_rejects_unrecorded_winner() {
        let mut json = serde_json::to_value(fresh(3)).unwrap();
        json["scores"]["first"] = serde_json::json!(3);
        json["rounds_played"] = serde_json::json!(3);

        let err = serde_json::from_value::<MatchState>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid match state"));
    }

    #[test]
    fn test_deserialize_rejects_score_past_target() {
        let mut json = serde_json::to_value(fresh(3)).unwrap();
        json["scores"]["first"] = serde_json::json!(4);
        json["rounds_played"] = serde_json::json!(4);
        json["winner"] = serde_json::json!("First");

        assert!(serde_json::from_value::<MatchState>(json).is_err());
    }

    #[test]
    fn test_deserialized_finished_match_stays_closed() {
        let mut game = fresh(1);
        play(&mut game, Move::Paper, Move::Rock);
        let json = serde_json::to_string(&game).unwrap();

        let mut back: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.check_match_end(), MatchStatus::Finished(Seat::First));
        assert_eq!(
            back.set_move(Seat::First, Move::Rock),
            Err(EngineError::MatchFinished)
        );
    }
}
