//! In-progress guess buffer
//!
//! The composer enforces its own bounds: appending to a full buffer and
//! deleting from an empty one are no-ops, and submit refuses an incomplete
//! buffer even when the view already disabled the submit control.

use crate::core::{GameError, Letter, WORD_LENGTH, Word};

/// Placeholder shown in unfilled cells of the active row
pub const BLANK_CELL: char = ' ';

/// State machine holding the guess being typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessComposer {
    buffer: Vec<Letter>,
}

/// What the view needs to render the active row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposerView {
    /// One cell per position, `None` for positions not typed yet
    pub cells: [Option<Letter>; WORD_LENGTH],
    /// True exactly when the buffer is full
    pub submit_enabled: bool,
}

impl ComposerView {
    /// Active row as text, padded with [`BLANK_CELL`]
    #[must_use]
    pub fn padded(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or(BLANK_CELL, Letter::as_char))
            .collect()
    }
}

impl GuessComposer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(WORD_LENGTH),
        }
    }

    /// Append a letter unless the buffer is already full
    pub fn append_letter(&mut self, letter: Letter) {
        if self.buffer.len() < WORD_LENGTH {
            self.buffer.push(letter);
        }
    }

    /// Drop the last letter; no-op on an empty buffer
    pub fn delete_last(&mut self) {
        self.buffer.pop();
    }

    /// Finalize the buffer into a [`Word`] and reset it
    ///
    /// # Errors
    /// Returns [`GameError::IncompleteGuess`] and leaves the buffer untouched
    /// unless it holds exactly [`WORD_LENGTH`] letters.
    pub fn submit(&mut self) -> Result<Word, GameError> {
        if !self.submit_enabled() {
            return Err(GameError::IncompleteGuess {
                len: self.buffer.len(),
            });
        }
        let word = Word::from_letters(&self.buffer)?;
        self.buffer.clear();
        Ok(word)
    }

    /// Letters typed so far
    #[must_use]
    pub fn buffer(&self) -> &[Letter] {
        &self.buffer
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.buffer.len() == WORD_LENGTH
    }

    /// Immutable view of the active row
    #[must_use]
    pub fn view(&self) -> ComposerView {
        ComposerView {
            cells: std::array::from_fn(|i| self.buffer.get(i).copied()),
            submit_enabled: self.submit_enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_word(composer: &mut GuessComposer, text: &str) {
        for ch in text.chars() {
            composer.append_letter(Letter::new(ch).unwrap());
        }
    }

    #[test]
    fn starts_empty() {
        let composer = GuessComposer::new();
        assert!(composer.is_empty());
        assert!(!composer.submit_enabled());
        assert_eq!(composer.view().padded(), "     ");
    }

    #[test]
    fn append_when_full_is_noop() {
        let mut composer = GuessComposer::new();
        type_word(&mut composer, "plantx");
        assert_eq!(composer.len(), WORD_LENGTH);
        assert_eq!(composer.view().padded(), "PLANT");
    }

    #[test]
    fn delete_on_empty_is_noop() {
        let mut composer = GuessComposer::new();
        composer.delete_last();
        assert!(composer.is_empty());

        type_word(&mut composer, "ab");
        composer.delete_last();
        assert_eq!(composer.view().padded(), "A    ");
    }

    #[test]
    fn submit_incomplete_is_rejected_and_keeps_buffer() {
        let mut composer = GuessComposer::new();
        type_word(&mut composer, "pla");
        assert_eq!(composer.submit(), Err(GameError::IncompleteGuess { len: 3 }));
        assert_eq!(composer.len(), 3);
    }

    #[test]
    fn submit_full_returns_word_and_resets() {
        let mut composer = GuessComposer::new();
        type_word(&mut composer, "plant");
        assert!(composer.view().submit_enabled);

        let word = composer.submit().unwrap();
        assert_eq!(word, Word::new("PLANT").unwrap());
        assert!(composer.is_empty());
        assert!(!composer.submit_enabled());
    }
}
