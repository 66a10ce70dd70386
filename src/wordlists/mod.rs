//! Word lists for hangman
//!
//! Provides the default word bank compiled into the binary, plus loading of
//! custom lists from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::engine::{GameError, WordBank};

/// The embedded default bank
///
/// # Errors
///
/// Returns `GameError` only if the embedded list is empty or malformed.
pub fn default_bank() -> Result<WordBank, GameError> {
    WordBank::from_strs(WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn default_bank_builds() {
        let bank = default_bank().unwrap();
        assert_eq!(bank.len(), WORDS_COUNT);
        assert!(bank.len() > 1);
    }
}
