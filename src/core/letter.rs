//! Letters of the game alphabet
//!
//! The alphabet is closed: the 26 Latin letters plus `Ñ`, which sits between
//! `N` and `O` exactly as it does on a Spanish keyboard.

use super::GameError;
use std::fmt;

/// Every letter a secret or a guess may contain, in keyboard order
pub const ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// A single upper-case letter from [`ALPHABET`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// Normalize a character to upper case and validate it against [`ALPHABET`]
    ///
    /// # Errors
    /// Returns [`GameError::InvalidLetter`] for anything outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Letter;
    ///
    /// assert_eq!(Letter::new('a').unwrap().as_char(), 'A');
    /// assert_eq!(Letter::new('ñ').unwrap().as_char(), 'Ñ');
    /// assert!(Letter::new('3').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self, GameError> {
        // Match against the alphabet and its lower-case forms only, so
        // characters that merely upper-case into it (dotless i, long s) are refused
        ALPHABET
            .iter()
            .copied()
            .find(|&c| c == ch || c.to_lowercase().eq([ch]))
            .map(Self)
            .ok_or(GameError::InvalidLetter(ch))
    }

    /// The canonical upper-case character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Position of this letter on the keyboard (index into [`ALPHABET`])
    #[must_use]
    pub fn keyboard_index(self) -> usize {
        ALPHABET.iter().position(|&c| c == self.0).unwrap_or_default()
    }

    /// Iterate over the whole alphabet in keyboard order
    pub fn all() -> impl Iterator<Item = Self> {
        ALPHABET.iter().map(|&c| Self(c))
    }
}

impl TryFrom<char> for Letter {
    type Error = GameError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_is_normalized() {
        assert_eq!(Letter::new('q').unwrap(), Letter::new('Q').unwrap());
        assert_eq!(Letter::new('ñ').unwrap().as_char(), 'Ñ');
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        for ch in ['1', ' ', '!', 'é', 'ß', 'Ω'] {
            assert_eq!(Letter::new(ch), Err(GameError::InvalidLetter(ch)));
        }
    }

    #[test]
    fn rejects_characters_that_only_uppercase_into_alphabet() {
        // U+0131 and U+017F upper-case to 'I' and 'S'
        for ch in ['ı', 'ſ'] {
            assert_eq!(Letter::new(ch), Err(GameError::InvalidLetter(ch)));
        }
        assert_eq!(Letter::new('i').unwrap().as_char(), 'I');
        assert_eq!(Letter::new('s').unwrap().as_char(), 'S');
    }

    #[test]
    fn keyboard_order_places_enye_after_n() {
        let n = Letter::new('N').unwrap().keyboard_index();
        let enye = Letter::new('Ñ').unwrap().keyboard_index();
        let o = Letter::new('O').unwrap().keyboard_index();
        assert_eq!(enye, n + 1);
        assert_eq!(o, enye + 1);
    }

    #[test]
    fn all_covers_alphabet() {
        let letters: Vec<char> = Letter::all().map(Letter::as_char).collect();
        assert_eq!(letters, ALPHABET);
    }
}
