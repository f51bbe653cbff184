//! Wordle Game
//!
//! A single-player Wordle: set a secret, then guess it letter by letter with
//! exact/present/absent feedback and a keyboard that remembers the best
//! feedback seen for every letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Letter;
//! use wordle_game::game::{Game, GameConfig, InputEvent, SessionState};
//!
//! let mut game = Game::with_secret("plant", GameConfig::default()).unwrap();
//!
//! for ch in "plant".chars() {
//!     game.handle(InputEvent::Letter(Letter::new(ch).unwrap())).unwrap();
//! }
//! game.handle(InputEvent::Submit).unwrap();
//!
//! assert_eq!(game.snapshot().state, SessionState::Won);
//! ```

// Core domain types
pub mod core;

// Scoring, keyboard, composer and session state machines
pub mod game;

// Candidate secrets
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
