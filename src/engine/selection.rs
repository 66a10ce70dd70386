//! Secret word selection

use super::WordBank;
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::debug;

/// Pick a secret uniformly at random, avoiding `previous` when possible
///
/// The previous secret is filtered out only when something else remains, so
/// a one-word bank keeps returning its only word.
pub fn pick_secret<'a, R: Rng + ?Sized>(
    bank: &'a WordBank,
    previous: Option<&Word>,
    rng: &mut R,
) -> &'a Word {
    let pool: Vec<&Word> = bank
        .iter()
        .filter(|w| previous.is_none_or(|p| *w != p))
        .collect();

    let picked = if pool.is_empty() {
        bank.choose(rng)
    } else {
        pool.choose(rng).copied()
    };
    let secret = picked.unwrap_or_else(|| bank.first());

    debug!(
        pool = pool.len(),
        bank = bank.len(),
        len = secret.len(),
        "picked secret"
    );
    secret
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn never_repeats_previous_with_choice() {
        let bank = WordBank::from_strs(&["cat", "dog"]).unwrap();
        let cat = Word::new("cat").unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            assert_eq!(pick_secret(&bank, Some(&cat), &mut rng).text(), "DOG");
        }
    }

    #[test]
    fn single_word_bank_reuses_word() {
        let bank = WordBank::from_strs(&["cat"]).unwrap();
        let cat = Word::new("cat").unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(pick_secret(&bank, Some(&cat), &mut rng).text(), "CAT");
    }

    #[test]
    fn previous_outside_bank_leaves_pool_intact() {
        let bank = WordBank::from_strs(&["cat", "dog", "owl"]).unwrap();
        let emu = Word::new("emu").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let secret = pick_secret(&bank, Some(&emu), &mut rng);
        assert!(bank.iter().any(|w| w == secret));
    }

    #[test]
    fn covers_whole_bank_without_previous() {
        let bank = WordBank::from_strs(&["cat", "dog", "owl"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = rustc_hash::FxHashSet::default();

        for _ in 0..200 {
            seen.insert(pick_secret(&bank, None, &mut rng).text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn same_seed_same_choice() {
        let bank = WordBank::from_strs(&["cat", "dog", "owl", "emu", "yak"]).unwrap();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(
                pick_secret(&bank, None, &mut a),
                pick_secret(&bank, None, &mut b)
            );
        }
    }
}
