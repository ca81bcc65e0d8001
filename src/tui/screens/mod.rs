//! Screen implementations for the game's state machine.

mod about;
mod ending;
mod playground;
mod rounds;
mod start;

pub use about::AboutScreen;
pub use ending::{EndingScreen, EndingStage};
pub use playground::{Phase, PlaygroundScreen, Tone};
pub use rounds::{RoundsInputError, RoundsScreen, parse_rounds};
pub use start::StartScreen;
