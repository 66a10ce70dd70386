//! Construction-time errors for the game engine
//!
//! Gameplay itself never fails: bad input is silently ignored. These errors
//! only surface when building a word bank or a configuration.

use crate::core::WordError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The word bank has no words
    EmptyBank,
    /// A word in the bank failed validation
    InvalidWord { word: String, source: WordError },
    /// A loss threshold of zero would start every round already lost
    ZeroWrongGuesses,
    /// More wrong guesses than letters in the alphabet, so a round could never be lost
    TooManyWrongGuesses(u8),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBank => write!(f, "Word bank must contain at least one word"),
            Self::InvalidWord { word, source } => {
                write!(f, "Invalid word '{word}' in word bank: {source}")
            }
            Self::ZeroWrongGuesses => write!(f, "Maximum wrong guesses must be at least 1"),
            Self::TooManyWrongGuesses(n) => {
                write!(f, "Maximum wrong guesses must be at most 26, got {n}")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}
