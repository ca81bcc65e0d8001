//! Computer opponent drawing uniformly random moves.

use super::Player;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_rps::{MatchState, Move, generate_computer_move};
use tracing::debug;

/// Opponent that ignores the match and throws a random move each round.
pub struct ComputerPlayer {
    name: String,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a computer player seeded from system entropy.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a computer player with a reproducible move sequence.
    pub fn seeded(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for ComputerPlayer {
    fn choose(&mut self, game: &MatchState) -> Move {
        let mv = generate_computer_move(&mut self.rng);
        debug!(ai = %self.name, round = game.rounds_played() + 1, %mv, "Computer chose move");
        mv
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_moves() {
        let game = MatchState::start(3).unwrap();
        let mut a = ComputerPlayer::seeded("Computer", 5);
        let mut b = ComputerPlayer::seeded("Computer", 5);
        for _ in 0..20 {
            assert_eq!(a.choose(&game), b.choose(&game));
        }
    }
}
