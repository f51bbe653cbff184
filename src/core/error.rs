//! Error types for the game core.
//!
//! Every variant is a local, recoverable rejection: the operation that
//! produced it leaves all game state unchanged.

use thiserror::Error;

/// Errors raised by words, the guess composer and the game session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A secret or guess did not have the required number of letters
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// A character outside the game alphabet was supplied
    #[error("'{0}' is not a letter of the game alphabet")]
    InvalidLetter(char),

    /// Submit was requested before the guess buffer was full
    #[error("guess is incomplete: {len} letters entered")]
    IncompleteGuess {
        /// Letters in the buffer at the time of the request
        len: usize,
    },

    /// A mutating action was requested after the session was won or lost
    #[error("session has already ended")]
    SessionTerminated,

    /// Game configuration values are out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
