//! Game configuration

use crate::core::{GameError, MAX_ATTEMPTS};

/// Tunables for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
}

impl GameConfig {
    /// # Errors
    /// Returns [`GameError::InvalidConfig`] when `max_attempts` is zero.
    pub fn new(max_attempts: usize) -> Result<Self, GameError> {
        if max_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(Self { max_attempts })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_six_attempts() {
        assert_eq!(GameConfig::default().max_attempts, 6);
    }

    #[test]
    fn zero_attempts_rejected() {
        assert!(matches!(
            GameConfig::new(0),
            Err(GameError::InvalidConfig(_))
        ));
        assert_eq!(GameConfig::new(3).unwrap().max_attempts, 3);
    }
}
