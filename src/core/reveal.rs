//! Reveal pattern: the secret with unguessed positions masked

use super::{LetterSet, Word};
use std::fmt;

/// Per-position view of the secret
///
/// Each slot holds the letter when it has been guessed, or `None` when it is
/// still hidden. The slot count always equals the secret's length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal(Vec<Option<char>>);

impl Reveal {
    /// Marker shown for a hidden position
    pub const PLACEHOLDER: char = '_';

    /// Compute the reveal pattern for `secret` given the guessed letters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{LetterSet, Reveal, Word};
    ///
    /// let secret = Word::new("CAT").unwrap();
    /// let guessed: LetterSet = "CZ".chars().collect();
    /// let reveal = Reveal::calculate(&secret, guessed);
    ///
    /// assert_eq!(reveal.to_string(), "C _ _");
    /// ```
    #[must_use]
    pub fn calculate(secret: &Word, guessed: LetterSet) -> Self {
        Self(
            secret
                .chars()
                .map(|c| guessed.contains(c).then_some(c))
                .collect(),
        )
    }

    /// The raw slots
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<char>] {
        &self.0
    }

    /// Slots rendered as characters, hidden positions as the placeholder
    pub fn cells(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().map(|slot| slot.unwrap_or(Self::PLACEHOLDER))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of positions currently shown
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when no position is hidden
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Compact form without separators, e.g. `CA_`
    #[must_use]
    pub fn compact(&self) -> String {
        self.cells().collect()
    }
}

impl fmt::Display for Reveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
