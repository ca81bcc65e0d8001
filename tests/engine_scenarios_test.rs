//! End-to-end match scenarios against the engine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_rps::{
    EngineError, MatchState, MatchStatus, Move, Outcome, Scores, Seat, Side, TIE_CAUSE,
    generate_computer_move,
};

fn seeded_match(target: u32) -> MatchState {
    let mut rng = StdRng::seed_from_u64(42);
    MatchState::start_with_rng(target, &mut rng).unwrap()
}

fn play(game: &mut MatchState, first: Move, second: Move) -> strictly_rps::RoundResult {
    game.set_move(Seat::First, first).unwrap();
    game.set_move(Seat::Second, second).unwrap();
    game.resolve_round().unwrap()
}

#[test]
fn test_first_round_win() {
    let mut game = seeded_match(3);
    let result = play(&mut game, Move::Rock, Move::Scissor);

    assert_eq!(result.outcome(), Outcome::FirstPlayerWins);
    assert_eq!(result.cause(), "Rock crushes Scissor");
    assert_eq!(result.scores(), Scores { first: 1, second: 0 });
    assert_eq!(game.check_match_end(), MatchStatus::InProgress);
}

#[test]
fn test_tie_leaves_scores_unchanged() {
    let mut game = seeded_match(3);
    play(&mut game, Move::Rock, Move::Scissor);
    let result = play(&mut game, Move::Paper, Move::Paper);

    assert_eq!(result.outcome(), Outcome::Tie);
    assert_eq!(result.cause(), TIE_CAUSE);
    assert_eq!(result.scores(), Scores { first: 1, second: 0 });
    assert_eq!(game.rounds_played(), 2);
}

#[test]
fn test_three_wins_finish_the_match() {
    let mut game = seeded_match(3);
    play(&mut game, Move::Rock, Move::Scissor);
    play(&mut game, Move::Paper, Move::Rock);
    assert!(!game.is_finished());
    let last = play(&mut game, Move::Scissor, Move::Paper);

    assert_eq!(last.cause(), "Scissor cuts Paper");
    assert_eq!(game.check_match_end(), MatchStatus::Finished(Seat::First));
    assert_eq!(game.winner(), Some(Seat::First));
}

#[test]
fn test_zero_target_rejected() {
    let err = MatchState::start(0).unwrap_err();
    assert!(err.message.contains("positive"));
}

#[test]
fn test_resolve_with_one_move_is_misuse() {
    let mut game = seeded_match(3);
    game.set_move(Seat::First, Move::Rock).unwrap();

    assert_eq!(
        game.resolve_round(),
        Err(EngineError::MissingMove(Seat::Second))
    );
    assert_eq!(game.scores(), Scores::default());
}

#[test]
fn test_moves_cleared_after_every_round() {
    let mut game = seeded_match(5);
    for (a, b) in [
        (Move::Rock, Move::Rock),
        (Move::Paper, Move::Scissor),
        (Move::Scissor, Move::Paper),
    ] {
        play(&mut game, a, b);
        assert_eq!(game.pending_move(Seat::First), None);
        assert_eq!(game.pending_move(Seat::Second), None);
    }
}

#[test]
fn test_second_seat_can_win() {
    let mut game = seeded_match(1);
    let result = play(&mut game, Move::Rock, Move::Paper);

    assert_eq!(result.outcome(), Outcome::SecondPlayerWins);
    assert_eq!(result.cause(), "Paper covers Rock");
    assert_eq!(game.status(), MatchStatus::Finished(Seat::Second));
}

#[test]
fn test_moves_rejected_after_finish() {
    let mut game = seeded_match(1);
    play(&mut game, Move::Paper, Move::Rock);

    assert_eq!(
        game.set_move(Seat::First, Move::Rock),
        Err(EngineError::MatchFinished)
    );
}

#[test]
fn test_restart_keeps_target_and_resets_scores() {
    let mut game = seeded_match(2);
    play(&mut game, Move::Paper, Move::Rock);
    play(&mut game, Move::Paper, Move::Rock);
    assert!(game.is_finished());

    let fresh = game.restart();
    assert_eq!(fresh.target_rounds(), 2);
    assert_eq!(fresh.scores(), Scores::default());
    assert_eq!(fresh.winner(), None);
    assert_eq!(fresh.rounds_played(), 0);
}

#[test]
fn test_restart_redraws_computer_side() {
    let mut game = seeded_match(2);
    play(&mut game, Move::Paper, Move::Rock);
    play(&mut game, Move::Paper, Move::Rock);

    let mut rng = StdRng::seed_from_u64(77);
    let sides: Vec<Side> = (0..64)
        .map(|_| game.restart_with_rng(&mut rng).computer_side())
        .collect();

    assert!(sides.contains(&Side::Left));
    assert!(sides.contains(&Side::Right));
}

#[test]
fn test_computer_side_fixed_for_the_match() {
    let mut game = seeded_match(4);
    let side = game.computer_side();
    for _ in 0..3 {
        play(&mut game, Move::Rock, Move::Rock);
        assert_eq!(game.computer_side(), side);
    }
}

#[test]
fn test_computer_moves_roughly_uniform() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts = [0u32; 3];
    for _ in 0..10_000 {
        let idx = match generate_computer_move(&mut rng) {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissor => 2,
        };
        counts[idx] += 1;
    }
    for count in counts {
        assert!((3000..=3700).contains(&count), "skewed counts: {counts:?}");
    }
}
