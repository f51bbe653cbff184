//! Simple interactive CLI mode
//!
//! Line-oriented game without the TUI: each line typed is one guess.

use super::secret::{SecretSource, secret_entry_ready};
use crate::core::{GameError, Letter, WORD_LENGTH, Word};
use crate::game::{Game, GameConfig, InputEvent, Outcome, Statistics, Update};
use crate::output::formatters::{result_row, result_to_emoji};
use crate::output::{print_board, print_statistics};
use anyhow::Result;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use tracing::debug;

/// What the player asked for at the guess prompt
enum Command {
    Quit,
    NewGame,
    Guess(String),
}

fn parse_command(input: &str) -> Command {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        _ => Command::Guess(input.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a
/// preset secret is invalid.
pub fn run_simple(source: &SecretSource, config: GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type a {WORD_LENGTH}-letter guess and press Enter.");
    println!("  - {} right letter, right spot", " G ".black().on_green());
    println!("  - {} right letter, wrong spot", " Y ".black().on_yellow());
    println!("  - {} letter not creditable", " - ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    let mut stats = Statistics::new(config.max_attempts);

    'games: loop {
        let secret = match source.preset()? {
            Some(secret) => secret,
            None => prompt_secret()?,
        };
        let mut game = Game::new(secret, config);

        loop {
            print_board(&game.snapshot());

            let guess = match parse_command(&get_user_input("Guess")?) {
                Command::Quit => break 'games,
                Command::NewGame => {
                    println!("\n🔄 New game started!\n");
                    continue 'games;
                }
                Command::Guess(guess) => guess,
            };

            match submit_line(&mut game, &guess) {
                Ok(Update::Scored { result, state }) => {
                    println!("  {}", result_row(&result));
                    if let Some(outcome) = state.outcome() {
                        finish_game(&game, outcome, &mut stats);
                        if play_again()? {
                            println!("\n🔄 New game started!\n");
                            continue 'games;
                        }
                        break 'games;
                    }
                }
                Ok(Update::Composed(_)) => {}
                Err(err) => println!("❌ {err}\n"),
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Type one line into the game and submit it
///
/// A rejected line leaves the active row empty again.
fn submit_line(game: &mut Game, line: &str) -> Result<Update, GameError> {
    let letters = line
        .trim()
        .chars()
        .map(Letter::new)
        .collect::<Result<Vec<_>, _>>()?;

    if letters.len() > WORD_LENGTH {
        return Err(GameError::InvalidLength {
            expected: WORD_LENGTH,
            actual: letters.len(),
        });
    }

    for &letter in &letters {
        game.handle(InputEvent::Letter(letter))?;
    }

    let submitted = game.handle(InputEvent::Submit);
    if submitted.is_err() {
        while !game.composer().is_empty() {
            game.handle(InputEvent::Delete)?;
        }
    }
    submitted
}

fn finish_game(game: &Game, outcome: Outcome, stats: &mut Statistics) {
    let snapshot = game.snapshot();
    stats.record(outcome, snapshot.attempts_used);
    debug!(?outcome, attempts = snapshot.attempts_used, "simple game finished");

    println!("\n{}", "═".repeat(70).bright_cyan());
    match outcome {
        Outcome::Won => println!(
            "{}",
            format!("    🎉 {} 🎉    ", outcome.message().to_uppercase())
                .bright_green()
                .bold()
        ),
        Outcome::Lost => println!(
            "{}",
            format!("    {}    ", outcome.message().to_uppercase())
                .bright_red()
                .bold()
        ),
    }
    println!("{}", "═".repeat(70).bright_cyan());

    if let Some(secret) = snapshot.secret {
        println!("\n  The word was {}", secret.to_string().bright_yellow().bold());
    }
    println!(
        "\n{}",
        result_to_emoji(&snapshot.history, snapshot.max_attempts)
    );
    print_statistics(stats);
    println!();
}

fn prompt_secret() -> Result<Word> {
    loop {
        let input = get_user_input(&format!("Secret word ({WORD_LENGTH} letters)"))?;
        if !secret_entry_ready(&input) {
            println!("❌ The secret must have exactly {WORD_LENGTH} letters\n");
            continue;
        }
        match Word::new(&input) {
            Ok(secret) => {
                execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
                return Ok(secret);
            }
            Err(err) => println!("❌ {err}\n"),
        }
    }
}

fn play_again() -> Result<bool> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        anyhow::bail!("input closed");
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionState;

    fn game() -> Game {
        Game::with_secret("plant", GameConfig::default()).unwrap()
    }

    #[test]
    fn commands_are_recognized() {
        assert!(matches!(parse_command("QUIT"), Command::Quit));
        assert!(matches!(parse_command("new"), Command::NewGame));
        assert!(matches!(parse_command("crane"), Command::Guess(g) if g == "crane"));
    }

    #[test]
    fn full_line_is_scored() {
        let mut game = game();
        let update = submit_line(&mut game, "plant").unwrap();
        assert!(matches!(
            update,
            Update::Scored {
                state: SessionState::Won,
                ..
            }
        ));
    }

    #[test]
    fn short_line_is_rejected_and_row_cleared() {
        let mut game = game();
        assert_eq!(
            submit_line(&mut game, "pla"),
            Err(GameError::IncompleteGuess { len: 3 })
        );
        assert!(game.composer().is_empty());
        assert_eq!(game.session().attempts_used(), 0);
    }

    #[test]
    fn long_line_is_rejected() {
        let mut game = game();
        assert!(matches!(
            submit_line(&mut game, "planted"),
            Err(GameError::InvalidLength { actual: 7, .. })
        ));
        assert!(game.composer().is_empty());
    }

    #[test]
    fn invalid_letters_are_rejected() {
        let mut game = game();
        assert_eq!(
            submit_line(&mut game, "pl@nt"),
            Err(GameError::InvalidLetter('@'))
        );
    }
}
