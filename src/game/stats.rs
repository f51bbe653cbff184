//! Per-run statistics across finished sessions

use super::Outcome;

/// Rows allocated up front; longer limits grow the distribution on demand
const PRESIZED_ROWS: usize = 32;

/// Win/loss tally for the games played in this process
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts wins in exactly `n` attempts
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Empty tally with distribution rows for the attempts `max_attempts` allows
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_attempts.min(PRESIZED_ROWS) + 1],
        }
    }

    /// Record a finished game
    ///
    /// The distribution grows to fit wins beyond its current rows.
    pub fn record(&mut self, outcome: Outcome, attempts: usize) {
        self.total_games += 1;
        if outcome == Outcome::Won {
            self.games_won += 1;
            if self.guess_distribution.len() <= attempts {
                self.guess_distribution.resize(attempts + 1, 0);
            }
            self.guess_distribution[attempts] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
