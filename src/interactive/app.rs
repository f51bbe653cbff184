//! TUI application state and logic

use crate::commands::{SecretSource, secret_entry_ready};
use crate::core::{GameError, Letter, WORD_LENGTH, Word};
use crate::game::{Game, GameConfig, InputEvent, Outcome, Statistics, Update};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App {
    pub source: SecretSource,
    pub config: GameConfig,
    pub game: Option<Game>,
    pub input_mode: InputMode,
    pub secret_input: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// The player is typing the secret for the next game
    SecretEntry,
    Playing,
    /// The game ended; waiting for new game or quit
    Finished(Outcome),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// # Errors
    ///
    /// Returns an error if the secret source yields an invalid secret.
    pub fn new(source: SecretSource, config: GameConfig) -> Result<Self> {
        let mut app = Self {
            source,
            config,
            game: None,
            input_mode: InputMode::SecretEntry,
            secret_input: String::new(),
            messages: Vec::new(),
            stats: Statistics::new(config.max_attempts),
            should_quit: false,
        };
        app.new_game()?;
        Ok(app)
    }

    /// Start the next game, or ask for a secret when none is preset
    ///
    /// # Errors
    ///
    /// Returns an error if the secret source yields an invalid secret.
    pub fn new_game(&mut self) -> Result<()> {
        self.game = None;
        self.secret_input.clear();
        self.messages.clear();

        match self.source.preset()? {
            Some(secret) => self.start_game(secret),
            None => {
                self.input_mode = InputMode::SecretEntry;
                self.add_message(
                    &format!("Enter a secret word ({WORD_LENGTH} letters) and press Enter"),
                    MessageStyle::Info,
                );
            }
        }
        Ok(())
    }

    fn start_game(&mut self, secret: Word) {
        self.game = Some(Game::new(secret, self.config));
        self.input_mode = InputMode::Playing;
        self.add_message(
            &format!(
                "Guess the word in {} attempts. Enter submits, Backspace deletes.",
                self.config.max_attempts
            ),
            MessageStyle::Info,
        );
        info!("tui game started");
    }

    /// Whether the typed secret may be confirmed
    #[must_use]
    pub fn secret_ready(&self) -> bool {
        secret_entry_ready(&self.secret_input)
    }

    pub fn push_secret_char(&mut self, ch: char) {
        if self.secret_input.chars().count() >= WORD_LENGTH {
            return;
        }
        match Letter::new(ch) {
            Ok(letter) => self.secret_input.push(letter.as_char()),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn confirm_secret(&mut self) {
        if !self.secret_ready() {
            self.add_message(
                &format!("The secret must have exactly {WORD_LENGTH} letters"),
                MessageStyle::Error,
            );
            return;
        }
        match Word::new(&self.secret_input) {
            Ok(secret) => {
                self.secret_input.clear();
                self.messages.clear();
                self.start_game(secret);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Route one input event to the running game
    pub fn handle_input(&mut self, event: InputEvent) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match game.handle(event) {
            Ok(Update::Composed(_)) => {}
            Ok(Update::Scored { result, state }) => {
                self.add_message(
                    &format!("{} {}", result.guess(), result.to_emoji()),
                    MessageStyle::Info,
                );
                if let Some(outcome) = state.outcome() {
                    self.finish(outcome);
                }
            }
            Err(GameError::IncompleteGuess { len }) => self.add_message(
                &format!("Not enough letters ({len}/{WORD_LENGTH})"),
                MessageStyle::Error,
            ),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        let Some(snapshot) = self.game.as_ref().map(Game::snapshot) else {
            return;
        };
        self.stats.record(outcome, snapshot.attempts_used);
        self.input_mode = InputMode::Finished(outcome);
        debug!(?outcome, attempts = snapshot.attempts_used, "tui game finished");

        match outcome {
            Outcome::Won => {
                let celebration = match snapshot.attempts_used {
                    1 => "🎯 HOLE IN ONE! 🌟",
                    2 => "🔥 MAGNIFICENT! 🔥",
                    3 => "✨ SPLENDID! ✨",
                    4 => "👏 GREAT JOB! 👏",
                    5 => "🎉 NICE WORK! 🎉",
                    _ => "😅 PHEW! 😅",
                };
                self.add_message(outcome.message(), MessageStyle::Success);
                self.add_message(celebration, MessageStyle::Success);
            }
            Outcome::Lost => {
                self.add_message(outcome.message(), MessageStyle::Error);
                if let Some(secret) = snapshot.secret {
                    self.add_message(&format!("The word was {secret}"), MessageStyle::Info);
                }
            }
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if starting a new game fails.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::SecretEntry => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.push_secret_char(c),
                KeyCode::Backspace => {
                    self.secret_input.pop();
                }
                KeyCode::Enter => self.confirm_secret(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => match Letter::new(c) {
                    Ok(letter) => self.handle_input(InputEvent::Letter(letter)),
                    Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
                },
                KeyCode::Backspace => self.handle_input(InputEvent::Delete),
                KeyCode::Enter => self.handle_input(InputEvent::Submit),
                _ => {}
            },
            InputMode::Finished(_) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            },
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionState;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn preset_app(secret: &str) -> App {
        App::new(
            SecretSource::Given(secret.to_string()),
            GameConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn prompt_source_starts_with_secret_entry() {
        let app = App::new(SecretSource::Prompt, GameConfig::default()).unwrap();
        assert_eq!(app.input_mode, InputMode::SecretEntry);
        assert!(app.game.is_none());
    }

    #[test]
    fn secret_entry_requires_full_word() {
        let mut app = App::new(SecretSource::Prompt, GameConfig::default()).unwrap();
        type_str(&mut app, "pla");
        assert!(!app.secret_ready());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::SecretEntry);

        type_str(&mut app, "ntxyz");
        assert_eq!(app.secret_input, "PLANT");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Playing);
    }

    #[test]
    fn winning_switches_to_finished() {
        let mut app = preset_app("plant");
        type_str(&mut app, "plant");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Finished(Outcome::Won));
        assert_eq!(app.stats.games_won, 1);
        let state = app.game.as_ref().map(|g| g.session().state());
        assert_eq!(state, Some(SessionState::Won));
    }

    #[test]
    fn backspace_deletes_from_active_row() {
        let mut app = preset_app("plant");
        type_str(&mut app, "pla");
        press(&mut app, KeyCode::Backspace);
        let len = app.game.as_ref().map(|g| g.composer().len());
        assert_eq!(len, Some(2));
    }

    #[test]
    fn new_game_after_finish() {
        let mut app = preset_app("plant");
        type_str(&mut app, "plant");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.input_mode, InputMode::Playing);
        let used = app.game.as_ref().map(|g| g.session().attempts_used());
        assert_eq!(used, Some(0));
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn escape_quits() {
        let mut app = preset_app("plant");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
