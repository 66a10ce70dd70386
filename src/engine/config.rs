//! Session configuration

use super::GameError;

/// Tunable game parameters supplied when a session is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_wrong_guesses: u8,
}

impl GameConfig {
    /// Default loss threshold
    pub const DEFAULT_MAX_WRONG_GUESSES: u8 = 6;

    /// Largest usable threshold; beyond it a round could never be lost
    pub const MAX_WRONG_GUESSES: u8 = 26;

    /// Create a configuration with the given loss threshold
    ///
    /// # Errors
    ///
    /// Returns `GameError::ZeroWrongGuesses` if `max_wrong_guesses` is 0 and
    /// `GameError::TooManyWrongGuesses` if it exceeds the 26 letters of the alphabet.
    pub const fn new(max_wrong_guesses: u8) -> Result<Self, GameError> {
        if max_wrong_guesses == 0 {
            return Err(GameError::ZeroWrongGuesses);
        }
        if max_wrong_guesses > Self::MAX_WRONG_GUESSES {
            return Err(GameError::TooManyWrongGuesses(max_wrong_guesses));
        }
        Ok(Self { max_wrong_guesses })
    }

    /// Number of wrong guesses that ends a round in a loss
    #[inline]
    #[must_use]
    pub const fn max_wrong_guesses(self) -> u8 {
        self.max_wrong_guesses
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_wrong_guesses: Self::DEFAULT_MAX_WRONG_GUESSES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allows_six_wrong_guesses() {
        assert_eq!(GameConfig::default().max_wrong_guesses(), 6);
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(GameConfig::new(0), Err(GameError::ZeroWrongGuesses));
    }

    #[test]
    fn accepts_custom_threshold() {
        assert_eq!(GameConfig::new(10).unwrap().max_wrong_guesses(), 10);
        assert_eq!(GameConfig::new(26).unwrap().max_wrong_guesses(), 26);
    }

    #[test]
    fn rejects_unreachable_threshold() {
        assert_eq!(GameConfig::new(27), Err(GameError::TooManyWrongGuesses(27)));
        assert_eq!(GameConfig::new(u8::MAX), Err(GameError::TooManyWrongGuesses(255)));
    }
}
