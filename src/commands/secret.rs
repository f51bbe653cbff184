//! Secret provisioning for the interactive front ends

use crate::core::{GameError, WORD_LENGTH, Word};
use crate::wordlists::loader::random_secret;

/// Where the secret for the next game comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// A secret supplied on the command line
    Given(String),
    /// A fresh random pick from this list for every game
    Random(Vec<Word>),
    /// The player types the secret before each game
    Prompt,
}

impl SecretSource {
    /// Resolve a secret without user interaction
    ///
    /// Returns `Ok(None)` for [`SecretSource::Prompt`].
    ///
    /// # Errors
    ///
    /// Returns an error if a given secret is invalid or the random list is empty.
    pub fn preset(&self) -> Result<Option<Word>, GameError> {
        match self {
            Self::Given(text) => Word::new(text).map(Some),
            Self::Random(words) => random_secret(words)
                .map(Some)
                .ok_or_else(|| GameError::InvalidConfig("word list is empty".to_string())),
            Self::Prompt => Ok(None),
        }
    }
}

/// Whether typed secret input may be confirmed: exactly [`WORD_LENGTH`]
/// characters once surrounding whitespace is removed
#[must_use]
pub fn secret_entry_ready(input: &str) -> bool {
    input.trim().chars().count() == WORD_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn given_secret_is_validated() {
        let source = SecretSource::Given("plant".to_string());
        assert_eq!(source.preset(), Ok(Some(Word::new("PLANT").unwrap())));

        let bad = SecretSource::Given("plants".to_string());
        assert!(bad.preset().is_err());
    }

    #[test]
    fn random_secret_from_pool() {
        let pool = words_from_slice(&["crane"]);
        let source = SecretSource::Random(pool);
        assert_eq!(source.preset(), Ok(Some(Word::new("crane").unwrap())));
        assert!(SecretSource::Random(Vec::new()).preset().is_err());
    }

    #[test]
    fn prompt_has_no_preset() {
        assert_eq!(SecretSource::Prompt.preset(), Ok(None));
    }

    #[test]
    fn entry_ready_only_at_word_length() {
        assert!(!secret_entry_ready(""));
        assert!(!secret_entry_ready("plan"));
        assert!(secret_entry_ready(" plant "));
        assert!(secret_entry_ready("niñez"));
        assert!(!secret_entry_ready("plants"));
    }
}
