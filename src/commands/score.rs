//! Score command
//!
//! Scores one guess against one secret without starting a session.

use crate::core::{GameError, Word};
use crate::game::{GuessResult, score};

/// A secret together with the feedback for one guess
pub struct ScoreResult {
    pub secret: Word,
    pub result: GuessResult,
}

/// Validate both words and score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word has the wrong length or a letter outside
/// the alphabet.
pub fn score_words(secret: &str, guess: &str) -> Result<ScoreResult, GameError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;

    Ok(ScoreResult {
        secret,
        result: score(&secret, &guess),
    })
}
