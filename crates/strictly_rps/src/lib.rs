//! Pure rock-paper-scissors game logic.
//!
//! Two layers make up the crate:
//!
//! - **Rules**: the three moves, the beats-relation, and [`resolve`],
//!   which maps a pair of simultaneous moves to an [`Outcome`].
//! - **Engine**: [`MatchState`] tracks scores toward a target number of
//!   wins, resolves rounds, and records the match winner.
//!
//! # Example
//!
//! ```
//! use strictly_rps::{MatchState, MatchStatus, Move, Outcome, Seat};
//!
//! let mut game = MatchState::start(3)?;
//! game.set_move(Seat::First, Move::Rock)?;
//! game.set_move(Seat::Second, Move::Scissor)?;
//!
//! let round = game.resolve_round()?;
//! assert_eq!(round.outcome(), Outcome::FirstPlayerWins);
//! assert_eq!(round.cause(), "Rock crushes Scissor");
//! assert_eq!(game.check_match_end(), MatchStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod engine;
mod error;
pub mod invariants;
mod round;
mod rules;
mod types;

pub use contracts::{Contract, MatchOpen, MovesPresent, RoundContract};
pub use engine::{MatchState, generate_computer_move};
pub use error::{ConfigError, EngineError};
pub use round::{MatchStatus, RoundResult, Scores};
pub use rules::{Outcome, TIE_CAUSE, cause, resolve};
pub use types::{Move, Seat, Side};
