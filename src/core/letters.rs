//! Compact set of uppercase ASCII letters
//!
//! A `LetterSet` stores membership for 'A'..='Z' as a 26-bit mask.
//! Bit `i` is set when the letter `'A' + i` is a member, so iteration
//! naturally yields letters in alphabetical order.

use std::fmt;

/// Set of uppercase ASCII letters
///
/// Characters outside 'A'..='Z' are never members: inserting one is a no-op
/// and `contains` reports `false` for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter of the alphabet
    pub const ALPHABET: Self = Self((1 << 26) - 1);

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Bit index for an uppercase ASCII letter
    #[inline]
    const fn index(letter: char) -> Option<u32> {
        if letter.is_ascii_uppercase() {
            Some(letter as u32 - 'A' as u32)
        } else {
            None
        }
    }

    /// Insert a letter
    ///
    /// Returns `true` if the letter was newly added. Non-letters and lowercase
    /// characters are rejected and return `false`.
    #[inline]
    pub fn insert(&mut self, letter: char) -> bool {
        let Some(bit) = Self::index(letter) else {
            return false;
        };
        let mask = 1 << bit;
        let added = self.0 & mask == 0;
        self.0 |= mask;
        added
    }

    /// Check whether a letter is a member
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: char) -> bool {
        match Self::index(letter) {
            Some(bit) => self.0 & (1 << bit) != 0,
            None => false,
        }
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Remove every letter
    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Iterate over members in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        ('A'..='Z').filter(move |&c| self.contains(c))
    }

    /// Members as an alphabetically sorted vector
    #[must_use]
    pub fn to_sorted_vec(self) -> Vec<char> {
        self.iter().collect()
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_new_members() {
        let mut set = LetterSet::new();
        assert!(set.insert('C'));
        assert!(!set.insert('C'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn rejects_non_uppercase() {
        let mut set = LetterSet::new();
        assert!(!set.insert('c'));
        assert!(!set.insert('1'));
        assert!(!set.insert('É'));
        assert!(set.is_empty());
        assert!(!set.contains('c'));
    }

    #[test]
    fn iterates_alphabetically() {
        let set: LetterSet = "ZEBRA".chars().collect();
        assert_eq!(set.to_sorted_vec(), vec!['A', 'B', 'E', 'R', 'Z']);
    }

    #[test]
    fn superset_and_difference() {
        let word: LetterSet = "CAT".chars().collect();
        let guessed: LetterSet = "TACX".chars().collect();

        assert!(guessed.is_superset(word));
        assert!(!word.is_superset(guessed));
        assert_eq!(guessed.difference(word).to_sorted_vec(), vec!['X']);
    }

    #[test]
    fn alphabet_has_every_letter() {
        assert_eq!(LetterSet::ALPHABET.len(), 26);
        assert!(LetterSet::ALPHABET.contains('A'));
        assert!(LetterSet::ALPHABET.contains('Z'));
    }

    #[test]
    fn display_space_separated() {
        let set: LetterSet = "QEA".chars().collect();
        assert_eq!(set.to_string(), "A E Q");
        assert_eq!(LetterSet::EMPTY.to_string(), "");
    }

    #[test]
    fn clear_empties_set() {
        let mut set: LetterSet = "ABC".chars().collect();
        set.clear();
        assert!(set.is_empty());
    }
}
