//! Candidate secrets for random games
//!
//! Provides an embedded list compiled into the binary plus a file loader.
//! Guesses are never checked against these lists.

mod embedded;
pub mod loader;

pub use embedded::{SECRETS, SECRETS_COUNT};
