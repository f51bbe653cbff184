//! Formatting utilities for terminal output

use crate::core::{Classification, Letter};
use crate::game::{GuessResult, KeyboardAggregate};
use colored::{ColoredString, Colorize};

/// Colour one letter tile by its classification
#[must_use]
pub fn tile(letter: Letter, classification: Option<Classification>) -> ColoredString {
    let text = format!(" {letter} ");
    match classification {
        Some(Classification::Exact) => text.black().on_green().bold(),
        Some(Classification::Present) => text.black().on_yellow().bold(),
        Some(Classification::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a scored guess as a row of coloured tiles
#[must_use]
pub fn result_row(result: &GuessResult) -> String {
    result
        .positions()
        .iter()
        .map(|p| tile(p.letter, Some(p.classification)).to_string())
        .collect()
}

/// Render the whole alphabet coloured by best-ever classification
#[must_use]
pub fn keyboard_line(keyboard: &KeyboardAggregate) -> String {
    keyboard
        .keys()
        .map(|(letter, best)| tile(letter, best).to_string())
        .collect()
}

/// Share line for a finished game, one emoji row per attempt
///
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::score;
/// use wordle_game::output::formatters::result_to_emoji;
///
/// let secret = Word::new("slate").unwrap();
/// let rows = [score(&secret, &Word::new("crane").unwrap())];
/// assert_eq!(result_to_emoji(&rows, 6), "X/6\n⬜⬜🟩⬜🟩");
/// ```
#[must_use]
pub fn result_to_emoji(history: &[GuessResult], max_attempts: usize) -> String {
    let solved = history.last().is_some_and(GuessResult::is_perfect);
    let score = if solved {
        history.len().to_string()
    } else {
        "X".to_string()
    };

    let mut lines = vec![format!("{score}/{max_attempts}")];
    lines.extend(history.iter().map(GuessResult::to_emoji));
    lines.join("\n")
}
