//! Letter selection strategies
//!
//! Defines the `LetterStrategy` trait and concrete implementations used to
//! play sessions automatically.

use crate::core::{LetterSet, Reveal, Word};
use crate::engine::SessionView;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Letters in rough order of English frequency, used when no candidate fits
const FALLBACK_ORDER: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// A strategy for choosing the next letter to guess
pub trait LetterStrategy {
    /// Pick the next letter given the current view and the word bank
    ///
    /// Returns `None` once every letter has been guessed.
    fn next_letter(&mut self, view: &SessionView, bank: &[Word]) -> Option<char>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Most common letter among consistent candidates (default)
    Frequency(FrequencyStrategy),
    /// Uniform choice among unguessed letters
    Random(RandomStrategy),
}

impl LetterStrategy for StrategyType {
    fn next_letter(&mut self, view: &SessionView, bank: &[Word]) -> Option<char> {
        match self {
            Self::Frequency(s) => s.next_letter(view, bank),
            Self::Random(s) => s.next_letter(view, bank),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random". Defaults to frequency if the
    /// name is unrecognized. `seed` only affects the random strategy.
    #[must_use]
    pub fn from_name(name: &str, seed: u64) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy::new(seed)),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }
}

/// Whether `word` could still be the secret behind `reveal`
///
/// Shown positions must match exactly. Hidden positions cannot hold a guessed
/// letter, since guessing a letter reveals every occurrence of it.
#[must_use]
pub fn is_consistent(word: &Word, reveal: &Reveal, guessed: LetterSet) -> bool {
    word.len() == reveal.len()
        && word
            .chars()
            .zip(reveal.slots())
            .all(|(c, slot)| match slot {
                Some(shown) => c == *shown,
                None => !guessed.contains(c),
            })
}

/// Frequency strategy
///
/// Filters the bank down to words consistent with what has been revealed and
/// guesses the unguessed letter that appears in the most of them. Ties go to
/// the alphabetically first letter.
pub struct FrequencyStrategy;

impl FrequencyStrategy {
    fn fallback(guessed: LetterSet) -> Option<char> {
        FALLBACK_ORDER.chars().find(|&c| !guessed.contains(c))
    }
}

impl LetterStrategy for FrequencyStrategy {
    fn next_letter(&mut self, view: &SessionView, bank: &[Word]) -> Option<char> {
        let guessed: LetterSet = view.guessed.iter().copied().collect();
        let mut counts = [0usize; 26];

        for word in bank.iter().filter(|w| is_consistent(w, &view.reveal, guessed)) {
            for letter in word.letters().difference(guessed).iter() {
                counts[(letter as u8 - b'A') as usize] += 1;
            }
        }

        let mut best: Option<(char, usize)> = None;
        for (letter, &count) in ('A'..='Z').zip(counts.iter()) {
            if count > 0 && best.is_none_or(|(_, top)| count > top) {
                best = Some((letter, count));
            }
        }

        best.map(|(letter, _)| letter)
            .or_else(|| Self::fallback(guessed))
    }
}

/// Random strategy
///
/// Picks uniformly among letters not yet guessed. Useful as a baseline.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl LetterStrategy for RandomStrategy {
    fn next_letter(&mut self, view: &SessionView, _bank: &[Word]) -> Option<char> {
        let guessed: LetterSet = view.guessed.iter().copied().collect();
        let open = LetterSet::ALPHABET.difference(guessed).to_sorted_vec();
        open.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GameConfig, Session, WordBank};

    fn session(words: &[&str]) -> Session {
        Session::with_seed(WordBank::from_strs(words).unwrap(), GameConfig::default(), 9)
    }

    #[test]
    fn consistency_respects_shown_and_hidden() {
        let guessed: LetterSet = "AX".chars().collect();
        let reveal = Reveal::calculate(&Word::new("CAT").unwrap(), guessed);

        assert!(is_consistent(&Word::new("BAT").unwrap(), &reveal, guessed));
        assert!(!is_consistent(&Word::new("BAA").unwrap(), &reveal, guessed));
        assert!(!is_consistent(&Word::new("BOT").unwrap(), &reveal, guessed));
        assert!(!is_consistent(&Word::new("CATS").unwrap(), &reveal, guessed));
    }

    #[test]
    fn frequency_prefers_common_letter() {
        let words = ["CAT", "BAT", "RAT", "DOG"];
        let bank = WordBank::from_strs(&words).unwrap();
        let view = session(&["CAT"]).snapshot();

        // A and T appear in three words each; A wins the tie
        assert_eq!(FrequencyStrategy.next_letter(&view, &bank), Some('A'));
    }

    #[test]
    fn frequency_skips_guessed_letters() {
        let mut s = session(&["CAT"]);
        s.guess("A");
        let bank = WordBank::from_strs(&["CAT", "BAT", "RAT", "DOG"]).unwrap();

        assert_eq!(FrequencyStrategy.next_letter(&s.snapshot(), &bank), Some('T'));
    }

    #[test]
    fn frequency_falls_back_when_no_candidate() {
        let view = session(&["CAT"]).snapshot();
        let bank = WordBank::from_strs(&["ELEPHANT"]).unwrap();

        assert_eq!(FrequencyStrategy.next_letter(&view, &bank), Some('E'));
    }

    #[test]
    fn frequency_solves_word_in_bank() {
        let bank = WordBank::from_strs(&["CAT", "BAT", "RAT", "DOG", "OWL"]).unwrap();
        let mut s = Session::with_seed(bank.clone(), GameConfig::default(), 3);
        let mut strategy = FrequencyStrategy;

        while !s.is_over() {
            let letter = strategy.next_letter(&s.snapshot(), &bank).unwrap();
            assert!(!s.guess_char(letter).is_ignored());
        }
        assert!(s.is_win());
    }

    #[test]
    fn random_never_repeats_a_letter() {
        let mut s = session(&["XYLOPHONE"]);
        let bank = s.bank().clone();
        let mut strategy = RandomStrategy::new(5);

        while !s.is_over() {
            let letter = strategy.next_letter(&s.snapshot(), &bank).unwrap();
            assert!(!s.is_guessed(letter));
            s.guess_char(letter);
        }
    }

    #[test]
    fn random_exhausts_alphabet() {
        let bank = WordBank::from_strs(&["CAT"]).unwrap();
        let mut s = Session::with_seed(bank.clone(), GameConfig::new(26).unwrap(), 1);
        let mut strategy = RandomStrategy::new(2);

        for letter in 'D'..='Z' {
            s.guess_char(letter);
        }
        for letter in ['B', 'A'] {
            s.guess_char(letter);
        }
        assert_eq!(strategy.next_letter(&s.snapshot(), &bank), Some('C'));
    }

    #[test]
    fn from_name_defaults_to_frequency() {
        assert!(matches!(StrategyType::from_name("random", 0), StrategyType::Random(_)));
        assert!(matches!(StrategyType::from_name("frequency", 0), StrategyType::Frequency(_)));
        assert!(matches!(StrategyType::from_name("bogus", 0), StrategyType::Frequency(_)));
    }
}
