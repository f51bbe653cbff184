//! Replay command
//!
//! Plays a full session from a fixed list of guesses, typing each one key by
//! key through the same driver the interactive front ends use.

use crate::core::{GameError, Word};
use crate::game::{Game, GameConfig, GuessResult, InputEvent, SessionState};

/// Configuration for replaying a game
pub struct ReplayConfig {
    pub secret: String,
    pub guesses: Vec<String>,
    pub game: GameConfig,
}

impl ReplayConfig {
    #[must_use]
    pub fn new(secret: String, guesses: Vec<String>) -> Self {
        Self {
            secret,
            guesses,
            game: GameConfig::default(),
        }
    }
}

/// Result of replaying a game
pub struct ReplayResult {
    pub secret: Word,
    pub history: Vec<GuessResult>,
    pub state: SessionState,
    pub max_attempts: usize,
}

/// Replay `config.guesses` against `config.secret`
///
/// # Errors
///
/// Returns an error if:
/// - The secret or any guess is not a valid word
/// - More guesses are supplied after the session has already ended
pub fn replay_game(config: ReplayConfig) -> Result<ReplayResult, GameError> {
    let secret = Word::new(&config.secret)?;
    let mut game = Game::new(secret, config.game);

    for guess in &config.guesses {
        let guess = Word::new(guess)?;
        game.type_text(&guess.text())?;
        game.handle(InputEvent::Submit)?;
    }

    let snapshot = game.snapshot();
    Ok(ReplayResult {
        secret,
        history: snapshot.history,
        state: snapshot.state,
        max_attempts: snapshot.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str, guesses: &[&str]) -> ReplayConfig {
        ReplayConfig::new(
            secret.to_string(),
            guesses.iter().map(ToString::to_string).collect(),
        )
    }

    #[test]
    fn replay_win() {
        let result = replay_game(config("plant", &["crane", "slant", "plant"])).unwrap();
        assert_eq!(result.state, SessionState::Won);
        assert_eq!(result.history.len(), 3);
    }

    #[test]
    fn replay_partial_game_stays_in_progress() {
        let result = replay_game(config("plant", &["crane"])).unwrap();
        assert_eq!(result.state, SessionState::InProgress);
    }

    #[test]
    fn replay_rejects_guesses_after_win() {
        let result = replay_game(config("plant", &["plant", "crane"]));
        assert!(matches!(result, Err(GameError::SessionTerminated)));
    }

    #[test]
    fn replay_respects_max_attempts() {
        let mut cfg = config("plant", &["crane", "robot"]);
        cfg.game = GameConfig::new(2).unwrap();
        let result = replay_game(cfg).unwrap();
        assert_eq!(result.state, SessionState::Lost);
        assert_eq!(result.max_attempts, 2);
    }

    #[test]
    fn replay_rejects_invalid_guess() {
        assert!(matches!(
            replay_game(config("plant", &["cr4ne"])),
            Err(GameError::InvalidLetter('4'))
        ));
    }
}
