//! Game engine: scoring, keyboard aggregation, guess composition and sessions

mod composer;
mod config;
mod driver;
mod keyboard;
mod scorer;
mod session;
mod stats;

pub use composer::{BLANK_CELL, ComposerView, GuessComposer};
pub use config::GameConfig;
pub use driver::{Game, GameSnapshot, InputEvent, Update};
pub use keyboard::KeyboardAggregate;
pub use scorer::{GuessResult, PositionResult, score};
pub use session::{GameSession, Outcome, SessionState};
pub use stats::Statistics;
