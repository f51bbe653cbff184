//! Command implementations

pub mod replay;
pub mod score;
pub mod secret;
pub mod simple;

pub use replay::{ReplayConfig, ReplayResult, replay_game};
pub use score::{ScoreResult, score_words};
pub use secret::{SecretSource, secret_entry_ready};
pub use simple::run_simple;
