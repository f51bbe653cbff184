//! Input event routing
//!
//! A [`Game`] owns one composer and one session. Each [`InputEvent`] runs to
//! completion and yields an [`Update`]; front ends re-render from
//! [`Game::snapshot`] afterwards.

use super::{
    ComposerView, GameConfig, GameSession, GuessComposer, GuessResult, KeyboardAggregate,
    SessionState,
};
use crate::core::{GameError, Letter, Word};
use tracing::warn;

/// The three kinds of key press a front end can send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(Letter),
    Delete,
    Submit,
}

/// Result of handling one input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// The active row changed (or stayed the same after a no-op)
    Composed(ComposerView),
    /// A guess was finalized and scored
    Scored {
        result: GuessResult,
        state: SessionState,
    },
}

/// Immutable copy of everything a view renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub composer: ComposerView,
    pub history: Vec<GuessResult>,
    pub keyboard: KeyboardAggregate,
    pub state: SessionState,
    pub attempts_used: usize,
    pub max_attempts: usize,
    /// Only populated once the session has ended
    pub secret: Option<Word>,
}

/// A composer wired to a session
#[derive(Debug, Clone)]
pub struct Game {
    composer: GuessComposer,
    session: GameSession,
}

impl Game {
    #[must_use]
    pub fn new(secret: Word, config: GameConfig) -> Self {
        Self {
            composer: GuessComposer::new(),
            session: GameSession::new(secret, config),
        }
    }

    /// # Errors
    /// Returns an error when `secret` is not a valid word.
    pub fn with_secret(secret: &str, config: GameConfig) -> Result<Self, GameError> {
        Ok(Self::new(Word::new(secret)?, config))
    }

    /// Process one input event
    ///
    /// # Errors
    /// - [`GameError::SessionTerminated`] for any event after the session ended
    /// - [`GameError::IncompleteGuess`] when submitting a partial buffer
    ///
    /// State is unchanged whenever an error is returned.
    pub fn handle(&mut self, event: InputEvent) -> Result<Update, GameError> {
        if self.session.state().is_terminal() {
            warn!(?event, "input rejected: session already ended");
            return Err(GameError::SessionTerminated);
        }

        match event {
            InputEvent::Letter(letter) => {
                self.composer.append_letter(letter);
                Ok(Update::Composed(self.composer.view()))
            }
            InputEvent::Delete => {
                self.composer.delete_last();
                Ok(Update::Composed(self.composer.view()))
            }
            InputEvent::Submit => {
                let guess = self.composer.submit().inspect_err(|err| {
                    warn!(%err, "submit rejected");
                })?;
                let result = self.session.submit_guess(&guess)?;
                Ok(Update::Scored {
                    result,
                    state: self.session.state(),
                })
            }
        }
    }

    /// Feed every character of `text` as a letter key
    ///
    /// # Errors
    /// Stops at the first character outside the alphabet or the first rejected event.
    pub fn type_text(&mut self, text: &str) -> Result<(), GameError> {
        for ch in text.chars() {
            self.handle(InputEvent::Letter(Letter::new(ch)?))?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn composer(&self) -> &GuessComposer {
        &self.composer
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            composer: self.composer.view(),
            history: self.session.history().to_vec(),
            keyboard: self.session.keyboard().clone(),
            state: self.session.state(),
            attempts_used: self.session.attempts_used(),
            max_attempts: self.session.config().max_attempts,
            secret: self.session.revealed_secret().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(secret: &str) -> Game {
        Game::with_secret(secret, GameConfig::default()).unwrap()
    }

    #[test]
    fn letters_fill_the_active_row() {
        let mut game = game("plant");
        let update = game
            .handle(InputEvent::Letter(Letter::new('p').unwrap()))
            .unwrap();
        let Update::Composed(view) = update else {
            panic!("expected composer update");
        };
        assert_eq!(view.padded(), "P    ");
        assert!(!view.submit_enabled);
    }

    #[test]
    fn incomplete_submit_keeps_buffer() {
        let mut game = game("plant");
        game.type_text("pla").unwrap();
        assert_eq!(
            game.handle(InputEvent::Submit),
            Err(GameError::IncompleteGuess { len: 3 })
        );
        assert_eq!(game.composer().len(), 3);
        assert_eq!(game.session().attempts_used(), 0);
    }

    #[test]
    fn submit_scores_and_clears_buffer() {
        let mut game = game("plant");
        game.type_text("plane").unwrap();
        let update = game.handle(InputEvent::Submit).unwrap();
        assert!(matches!(
            update,
            Update::Scored {
                state: SessionState::InProgress,
                ..
            }
        ));
        assert!(game.composer().is_empty());
        assert_eq!(game.snapshot().history.len(), 1);
    }

    #[test]
    fn every_event_rejected_after_win() {
        let mut game = game("plant");
        game.type_text("plant").unwrap();
        game.handle(InputEvent::Submit).unwrap();

        let a = Letter::new('a').unwrap();
        for event in [InputEvent::Letter(a), InputEvent::Delete, InputEvent::Submit] {
            assert_eq!(game.handle(event), Err(GameError::SessionTerminated));
        }
        assert!(game.composer().is_empty());
    }

    #[test]
    fn snapshot_reveals_secret_only_at_end() {
        let mut game = game("plant");
        assert_eq!(game.snapshot().secret, None);
        game.type_text("plant").unwrap();
        game.handle(InputEvent::Submit).unwrap();

        let snapshot = game.snapshot();
        assert_eq!(snapshot.state, SessionState::Won);
        assert_eq!(snapshot.secret, Some(Word::new("plant").unwrap()));
        assert_eq!(snapshot.attempts_used, 1);
        assert_eq!(snapshot.max_attempts, 6);
    }
}
