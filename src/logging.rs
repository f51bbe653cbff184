//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over the level passed on the command line.
//! The TUI owns the terminal, so it logs either to a file or not at all.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log events are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Human-readable events on stderr
    Stderr,
    /// Events appended to a file, without ANSI colours
    File(PathBuf),
    /// No subscriber is installed
    Off,
}

impl LogTarget {
    /// Pick a target for a front end; `owns_terminal` front ends never log to stderr
    #[must_use]
    pub fn for_frontend(log_file: Option<PathBuf>, owns_terminal: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if owns_terminal => Self::Off,
            None => Self::Stderr,
        }
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the level directive is malformed, the log file cannot
/// be created, or a subscriber is already installed.
pub fn init(level: &str, target: LogTarget) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{level}'"))?,
    };

    let (stderr_layer, file_layer) = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => (Some(fmt::layer().with_writer(std::io::stderr)), None),
        LogTarget::File(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            (
                None,
                Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file))),
            )
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_owners_do_not_log_to_stderr() {
        assert_eq!(LogTarget::for_frontend(None, true), LogTarget::Off);
        assert_eq!(LogTarget::for_frontend(None, false), LogTarget::Stderr);
        assert_eq!(
            LogTarget::for_frontend(Some(PathBuf::from("game.log")), true),
            LogTarget::File(PathBuf::from("game.log"))
        );
    }

    #[test]
    fn off_installs_nothing() {
        assert!(init("info", LogTarget::Off).is_ok());
    }
}
