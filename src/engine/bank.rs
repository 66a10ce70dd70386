//! Immutable word bank shared by sessions

use super::GameError;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::ops::Deref;
use std::sync::Arc;

/// Ordered, non-empty, duplicate-free list of candidate secrets
///
/// Cloning is cheap: the words live behind an `Arc`, so many independent
/// sessions can share one bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Arc<[Word]>,
}

impl WordBank {
    /// Build a bank from validated words
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyBank` if no words are supplied.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, GameError> {
        let mut seen = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| seen.insert(w.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyBank);
        }

        Ok(Self {
            words: words.into(),
        })
    }

    /// Build a bank from raw strings, validating each one
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidWord` for the first string that is not a
    /// valid word, or `GameError::EmptyBank` if the slice is empty.
    ///
    /// # Examples
    /// ```
    /// use hangman::engine::WordBank;
    ///
    /// let bank = WordBank::from_strs(&["cat", "dog", "CAT"]).unwrap();
    /// assert_eq!(bank.len(), 2);
    /// assert_eq!(bank[0].text(), "CAT");
    /// ```
    pub fn from_strs(words: &[&str]) -> Result<Self, GameError> {
        let words = words
            .iter()
            .map(|&s| {
                Word::new(s).map_err(|source| GameError::InvalidWord {
                    word: s.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    /// First word of the bank
    #[must_use]
    pub fn first(&self) -> &Word {
        // Non-empty by construction
        &self.words[0]
    }
}

impl Deref for WordBank {
    type Target = [Word];

    fn deref(&self) -> &[Word] {
        &self.words
    }
}
