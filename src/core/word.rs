//! Hangman word representation
//!
//! A Word stores an uppercase alphabetic word along with the set of distinct
//! letters it contains, which is what win detection and hit checks need.

use super::LetterSet;
use std::fmt;

/// An uppercase, ASCII-alphabetic word of any non-zero length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is trimmed and normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("lantern").unwrap();
    /// assert_eq!(word.text(), "LANTERN");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = text.chars().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters (positions) in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the letters in position order
    #[inline]
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    /// The distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CAT").unwrap();
        assert_eq!(word.text(), "CAT");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "CAT");

        let word2 = Word::new("  CaT\n").unwrap();
        assert_eq!(word2.text(), "CAT");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("c4t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ice cream"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("can't"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letters_are_distinct() {
        let word = Word::new("banana").unwrap();
        assert_eq!(word.letters().to_sorted_vec(), vec!['A', 'B', 'N']);
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("dragon").unwrap();
        assert!(word.has_letter('D'));
        assert!(word.has_letter('N'));
        assert!(!word.has_letter('Z'));
        assert!(!word.has_letter('d'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("falcon").unwrap();
        assert_eq!(format!("{word}"), "FALCON");
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("cat").unwrap(), Word::new("CAT").unwrap());
        assert_ne!(Word::new("cat").unwrap(), Word::new("dog").unwrap());
    }
}
