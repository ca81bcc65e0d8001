//! Error types for the match engine.

use super::types::Seat;
use derive_more::{Display, Error};
use tracing::instrument;

/// A rejected match configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Misuse of the match engine by its caller.
///
/// None of these arise from valid play; they indicate an integration
/// bug in whatever drives the engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// A round was resolved before this seat chose a move.
    #[display("No move recorded for the {} player", _0)]
    MissingMove(Seat),

    /// The match already has a winner.
    #[display("Match is already finished")]
    MatchFinished,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}
