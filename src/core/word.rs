//! Wordle word representation
//!
//! A Word stores exactly [`WORD_LENGTH`] normalized letters.

use super::{GameError, Letter, WORD_LENGTH};
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// A finalized word of exactly [`WORD_LENGTH`] letters
///
/// Letters are upper-cased on construction, so equality is case-insensitive
/// with respect to the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [Letter; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored; length is counted in characters.
    ///
    /// # Errors
    /// Returns `GameError` if:
    /// - Length is not exactly [`WORD_LENGTH`]
    /// - Any character is outside the alphabet
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, GameError> {
        let text = text.trim();

        let actual = text.chars().count();
        if actual != WORD_LENGTH {
            return Err(GameError::InvalidLength {
                expected: WORD_LENGTH,
                actual,
            });
        }

        let letters = text.chars().map(Letter::new).collect::<Result<Vec<_>, _>>()?;
        Self::from_letters(&letters)
    }

    /// Build a Word from already-validated letters
    ///
    /// # Errors
    /// Returns [`GameError::InvalidLength`] unless exactly [`WORD_LENGTH`] letters are given.
    pub fn from_letters(letters: &[Letter]) -> Result<Self, GameError> {
        let letters: [Letter; WORD_LENGTH] =
            letters.try_into().map_err(|_| GameError::InvalidLength {
                expected: WORD_LENGTH,
                actual: letters.len(),
            })?;
        Ok(Self { letters })
    }

    /// Get the word as an upper-case string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|l| l.as_char()).collect()
    }

    /// Get the letters in position order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the scorer to budget duplicate letters.
    pub(crate) fn letter_counts(&self) -> FxHashMap<Letter, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
