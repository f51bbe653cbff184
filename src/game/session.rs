//! One game: the secret, the attempt history and the win/loss state machine

use super::{GameConfig, GuessResult, KeyboardAggregate, score};
use crate::core::{GameError, Word};
use tracing::{debug, info};

/// Lifecycle of a session; transitions only move forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    InProgress,
    Won,
    Lost,
}

/// How a finished session ended, used to pick the closing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Won => "You won!",
            Self::Lost => "You lost",
        }
    }
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// The outcome of a terminal state, `None` while in progress
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::InProgress => None,
            Self::Won => Some(Outcome::Won),
            Self::Lost => Some(Outcome::Lost),
        }
    }
}

/// A single game against a fixed secret
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::{GameConfig, GameSession, SessionState};
///
/// let mut session = GameSession::with_secret("plant", GameConfig::default()).unwrap();
/// session.submit_guess(&Word::new("plane").unwrap()).unwrap();
/// session.submit_guess(&Word::new("plant").unwrap()).unwrap();
///
/// assert_eq!(session.state(), SessionState::Won);
/// assert_eq!(session.attempts_used(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    config: GameConfig,
    history: Vec<GuessResult>,
    keyboard: KeyboardAggregate,
    state: SessionState,
}

impl GameSession {
    #[must_use]
    pub fn new(secret: Word, config: GameConfig) -> Self {
        info!(max_attempts = config.max_attempts, "game session created");
        Self {
            secret,
            config,
            history: Vec::new(),
            keyboard: KeyboardAggregate::new(),
            state: SessionState::InProgress,
        }
    }

    /// Validate a raw secret and start a session with it
    ///
    /// # Errors
    /// Returns [`GameError::InvalidLength`] or [`GameError::InvalidLetter`]
    /// when `secret` is not a valid word; no session is created.
    pub fn with_secret(secret: &str, config: GameConfig) -> Result<Self, GameError> {
        Ok(Self::new(Word::new(secret)?, config))
    }

    /// Score a finalized guess and advance the state machine
    ///
    /// # Errors
    /// Returns [`GameError::SessionTerminated`] once the session is won or lost.
    pub fn submit_guess(&mut self, guess: &Word) -> Result<GuessResult, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::SessionTerminated);
        }

        let result = score(&self.secret, guess);
        self.history.push(result);
        self.keyboard.observe_result(&result);

        debug!(
            attempt = self.history.len(),
            guess = %guess,
            feedback = %result.to_markers(),
            "guess scored"
        );

        if *guess == self.secret {
            self.state = SessionState::Won;
        } else if self.history.len() >= self.config.max_attempts {
            self.state = SessionState::Lost;
        }

        if self.state.is_terminal() {
            info!(
                state = ?self.state,
                attempts = self.history.len(),
                "game session finished"
            );
        }

        Ok(result)
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Scored guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardAggregate {
        &self.keyboard
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }

    /// The secret, revealed only once the session has ended
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        self.state.is_terminal().then_some(&self.secret)
    }
}
