//! Feedback scoring for a single guess
//!
//! Scoring is the classic two-pass algorithm:
//! 1. Exact pass: mark every position whose letter matches the secret and
//!    spend one occurrence of that letter from the secret's budget.
//! 2. Present pass: scan the remaining positions left to right; a letter is
//!    `Present` while its budget is not exhausted, otherwise `Absent`.
//!
//! Exact matches are claimed before any `Present` credit is handed out, so a
//! later exact position never loses its credit to an earlier misplaced copy.

use crate::core::{Classification, Letter, WORD_LENGTH, Word};
use std::fmt;

/// One scored position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionResult {
    pub letter: Letter,
    pub classification: Classification,
}

/// The scored feedback for one finalized guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult {
    guess: Word,
    positions: [PositionResult; WORD_LENGTH],
}

impl GuessResult {
    /// Scored positions in guess order
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> &[PositionResult; WORD_LENGTH] {
        &self.positions
    }

    /// The guess this result was produced from
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Classifications in guess order
    #[must_use]
    pub fn classifications(&self) -> [Classification; WORD_LENGTH] {
        self.positions.map(|p| p.classification)
    }

    /// Keyboard observations produced by this guess
    pub fn observations(&self) -> impl Iterator<Item = (Letter, Classification)> + '_ {
        self.positions.iter().map(|p| (p.letter, p.classification))
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.positions
            .iter()
            .all(|p| p.classification == Classification::Exact)
    }

    /// Count the exact (green) positions
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(Classification::Exact)
    }

    /// Count the present (yellow) positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Classification::Present)
    }

    fn count(&self, classification: Classification) -> usize {
        self.positions
            .iter()
            .filter(|p| p.classification == classification)
            .count()
    }

    /// Convert the feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.positions
            .iter()
            .map(|p| p.classification.emoji())
            .collect()
    }

    /// Convert the feedback to an ASCII marker string like "GY-GY"
    #[must_use]
    pub fn to_markers(&self) -> String {
        self.positions
            .iter()
            .map(|p| p.classification.marker())
            .collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess(), self.to_markers())
    }
}

/// Score `guess` against `secret`
///
/// Both arguments are [`Word`]s, so the length precondition is enforced when
/// they are constructed.
///
/// # Examples
/// ```
/// use wordle_game::core::{Classification::*, Word};
/// use wordle_game::game::score;
///
/// let secret = Word::new("apple").unwrap();
/// let guess = Word::new("paper").unwrap();
/// let result = score(&secret, &guess);
///
/// assert_eq!(result.classifications(), [Present, Present, Exact, Present, Absent]);
/// ```
#[must_use]
pub fn score(secret: &Word, guess: &Word) -> GuessResult {
    let mut result = [Classification::Absent; WORD_LENGTH];
    let mut available = secret.letter_counts();

    // First pass: exact position matches claim their letter first
    for (i, slot) in result.iter_mut().enumerate() {
        let letter = guess.letter_at(i);
        if letter == secret.letter_at(i) {
            *slot = Classification::Exact;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters, left to right, within the remaining budget
    for (i, slot) in result.iter_mut().enumerate() {
        if *slot == Classification::Exact {
            continue;
        }
        if let Some(count) = available.get_mut(&guess.letter_at(i))
            && *count > 0
        {
            *slot = Classification::Present;
            *count -= 1;
        }
    }

    let positions = std::array::from_fn(|i| PositionResult {
        letter: guess.letter_at(i),
        classification: result[i],
    });

    GuessResult {
        guess: *guess,
        positions,
    }
}
