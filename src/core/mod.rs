//! Core domain types for Wordle
//!
//! This module contains the fundamental domain values with no I/O.
//! Everything here is pure and cheap to copy or clone.

mod classification;
mod error;
mod letter;
mod word;

pub use classification::Classification;
pub use error::GameError;
pub use letter::{ALPHABET, Letter};
pub use word::Word;

/// Number of letters in every secret and every finalized guess
pub const WORD_LENGTH: usize = 5;

/// Default number of guesses before a session is lost
pub const MAX_ATTEMPTS: usize = 6;
