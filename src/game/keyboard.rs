//! Best-ever classification per letter
//!
//! The keyboard folds every `(letter, classification)` observation with
//! `max`, which is commutative and idempotent: the snapshot depends only on
//! the set of observations, never on their order.

use super::GuessResult;
use crate::core::{Classification, Letter};
use rustc_hash::FxHashMap;

/// Monotonic mapping from letter to its best classification seen so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardAggregate {
    best: FxHashMap<Letter, Classification>,
}

impl KeyboardAggregate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the keyboard from scratch by folding a history of results
    #[must_use]
    pub fn from_history<'a>(history: impl IntoIterator<Item = &'a GuessResult>) -> Self {
        let mut keyboard = Self::new();
        for result in history {
            keyboard.observe_result(result);
        }
        keyboard
    }

    /// Merge one observation; a letter's rank never decreases
    pub fn observe(&mut self, letter: Letter, classification: Classification) {
        self.best
            .entry(letter)
            .and_modify(|best| *best = (*best).max(classification))
            .or_insert(classification);
    }

    /// Merge every position of a scored guess
    pub fn observe_result(&mut self, result: &GuessResult) {
        for (letter, classification) in result.observations() {
            self.observe(letter, classification);
        }
    }

    /// Best classification for `letter`, `None` while it is still blank
    #[must_use]
    pub fn get(&self, letter: Letter) -> Option<Classification> {
        self.best.get(&letter).copied()
    }

    /// Current view of the whole keyboard
    #[must_use]
    pub fn snapshot(&self) -> FxHashMap<Letter, Classification> {
        self.best.clone()
    }

    /// The full alphabet in keyboard order, paired with each letter's state
    pub fn keys(&self) -> impl Iterator<Item = (Letter, Option<Classification>)> + '_ {
        Letter::all().map(|letter| (letter, self.get(letter)))
    }

    /// Number of letters observed at least once
    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::score;
    use Classification::{Absent, Exact, Present};

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn unseen_letters_are_blank() {
        let keyboard = KeyboardAggregate::new();
        assert!(keyboard.is_empty());
        assert_eq!(keyboard.get(letter('A')), None);
    }

    #[test]
    fn exact_is_never_downgraded() {
        let mut keyboard = KeyboardAggregate::new();
        keyboard.observe(letter('A'), Exact);
        keyboard.observe(letter('A'), Present);
        keyboard.observe(letter('A'), Absent);
        assert_eq!(keyboard.get(letter('A')), Some(Exact));
    }

    #[test]
    fn present_upgrades_absent() {
        let mut keyboard = KeyboardAggregate::new();
        keyboard.observe(letter('E'), Absent);
        assert_eq!(keyboard.get(letter('E')), Some(Absent));
        keyboard.observe(letter('E'), Present);
        assert_eq!(keyboard.get(letter('E')), Some(Present));
    }

    #[test]
    fn order_of_observations_does_not_matter() {
        let observations = [
            (letter('A'), Absent),
            (letter('B'), Present),
            (letter('A'), Exact),
            (letter('B'), Absent),
        ];

        let mut forward = KeyboardAggregate::new();
        for &(l, c) in &observations {
            forward.observe(l, c);
        }
        let mut backward = KeyboardAggregate::new();
        for &(l, c) in observations.iter().rev() {
            backward.observe(l, c);
        }

        assert_eq!(forward.snapshot(), backward.snapshot());
        assert_eq!(forward.get(letter('B')), Some(Present));
    }

    #[test]
    fn duplicate_letter_in_one_guess_keeps_best() {
        // ALOHA vs CRANE: first A present, second A absent
        let result = score(&Word::new("crane").unwrap(), &Word::new("aloha").unwrap());
        let keyboard = KeyboardAggregate::from_history([&result]);
        assert_eq!(keyboard.get(letter('A')), Some(Present));
        assert_eq!(keyboard.get(letter('L')), Some(Absent));
        assert_eq!(keyboard.len(), 4);
    }

    #[test]
    fn keys_cover_alphabet_in_order() {
        let mut keyboard = KeyboardAggregate::new();
        keyboard.observe(letter('Ñ'), Exact);
        let keys: Vec<_> = keyboard.keys().collect();
        assert_eq!(keys.len(), crate::core::ALPHABET.len());
        assert_eq!(keys[14], (letter('Ñ'), Some(Exact)));
        assert_eq!(keys[0], (letter('A'), None));
    }
}
