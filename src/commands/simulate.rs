//! Simulation command
//!
//! Plays many independent sessions with an automatic strategy and aggregates
//! the results. Each session runs on its own rayon task and shares only the
//! immutable word bank.

use crate::autoplay::{LetterStrategy, StrategyType};
use crate::engine::{GameConfig, Session, WordBank};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Parameters for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of independent sessions
    pub sessions: usize,
    /// Rounds played in each session
    pub rounds_per_session: usize,
    /// Strategy name, see `StrategyType::from_name`
    pub strategy: String,
    /// Session `i` is seeded with `seed + i`
    pub seed: u64,
    pub game: GameConfig,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(sessions: usize, rounds_per_session: usize, strategy: impl Into<String>) -> Self {
        Self {
            sessions,
            rounds_per_session,
            strategy: strategy.into(),
            seed: 0,
            game: GameConfig::default(),
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn total_rounds(&self) -> usize {
        self.sessions * self.rounds_per_session
    }
}

/// Result of one automatically played round
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub secret: String,
    pub won: bool,
    pub wrong_guesses: usize,
    pub total_guesses: usize,
}

/// Aggregated statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub strategy: String,
    pub total_rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub average_wrong: f64,
    pub average_guesses: f64,
    /// Wins keyed by the number of wrong guesses they took
    pub wrong_distribution: FxHashMap<usize, usize>,
    /// Words lost most often, most frequent first
    pub hardest_words: Vec<(String, usize)>,
    pub max_wrong: u8,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play one session for `rounds` rounds
fn play_session(bank: &WordBank, config: &SimulationConfig, index: usize) -> Vec<RoundRecord> {
    let seed = config.seed.wrapping_add(index as u64);
    let mut session = Session::with_seed(bank.clone(), config.game, seed);
    let mut strategy = StrategyType::from_name(&config.strategy, seed);
    let mut records = Vec::with_capacity(config.rounds_per_session);

    for round in 0..config.rounds_per_session {
        if round > 0 {
            session.start_new_round();
        }

        let mut total_guesses = 0;
        while !session.is_over() {
            let Some(letter) = strategy.next_letter(&session.snapshot(), bank) else {
                break;
            };
            if !session.guess_char(letter).is_ignored() {
                total_guesses += 1;
            }
        }

        records.push(RoundRecord {
            secret: session.secret().text().to_string(),
            won: session.is_win(),
            wrong_guesses: session.wrong_guess_count(),
            total_guesses,
        });
    }

    debug!(session = index, rounds = records.len(), "session finished");
    records
}

/// Run the simulation and aggregate the results
#[must_use]
pub fn run_simulation(bank: &WordBank, config: &SimulationConfig) -> SimulationResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.sessions as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} sessions ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(config.strategy.clone());

    let records: Vec<RoundRecord> = (0..config.sessions)
        .into_par_iter()
        .flat_map_iter(|i| {
            let records = play_session(bank, config, i);
            pb.inc(1);
            records
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let result = aggregate(&config.strategy, config.game.max_wrong_guesses(), &records, duration);
    info!(
        rounds = result.total_rounds,
        wins = result.wins,
        elapsed_ms = duration.as_millis() as u64,
        "simulation finished"
    );
    result
}

fn aggregate(
    strategy: &str,
    max_wrong: u8,
    records: &[RoundRecord],
    duration: Duration,
) -> SimulationResult {
    let total_rounds = records.len();
    let wins = records.iter().filter(|r| r.won).count();
    let losses = total_rounds - wins;

    let mut wrong_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut lost_words: FxHashMap<&str, usize> = FxHashMap::default();
    for record in records {
        if record.won {
            *wrong_distribution.entry(record.wrong_guesses).or_insert(0) += 1;
        } else {
            *lost_words.entry(record.secret.as_str()).or_insert(0) += 1;
        }
    }

    let mut hardest_words: Vec<(String, usize)> = lost_words
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    hardest_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest_words.truncate(5);

    let ratio = |sum: usize| {
        if total_rounds == 0 {
            0.0
        } else {
            sum as f64 / total_rounds as f64
        }
    };

    SimulationResult {
        strategy: strategy.to_string(),
        total_rounds,
        wins,
        losses,
        win_rate: ratio(wins),
        average_wrong: ratio(records.iter().map(|r| r.wrong_guesses).sum()),
        average_guesses: ratio(records.iter().map(|r| r.total_guesses).sum()),
        wrong_distribution,
        hardest_words,
        max_wrong,
        duration,
        rounds_per_second: if duration.as_secs_f64() > 0.0 {
            total_rounds as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_bank() -> WordBank {
        WordBank::from_strs(&["CAT", "BAT", "RAT", "DOG", "OWL", "EMU"]).unwrap()
    }

    #[test]
    fn simulation_runs() {
        let config = SimulationConfig::new(4, 3, "frequency");
        let result = run_simulation(&small_bank(), &config);

        assert_eq!(config.total_rounds(), 12);
        assert_eq!(result.total_rounds, 12);
        assert_eq!(result.wins + result.losses, 12);
        assert!((0.0..=1.0).contains(&result.win_rate));
        assert!(result.average_guesses >= 1.0);
    }

    #[test]
    fn distribution_sums_to_wins() {
        let config = SimulationConfig::new(6, 4, "random");
        let result = run_simulation(&small_bank(), &config);

        let sum: usize = result.wrong_distribution.values().sum();
        assert_eq!(sum, result.wins);
        for &wrong in result.wrong_distribution.keys() {
            assert!(wrong < usize::from(result.max_wrong));
        }
    }

    #[test]
    fn frequency_wins_every_round_on_small_bank() {
        let config = SimulationConfig::new(5, 5, "frequency");
        let result = run_simulation(&small_bank(), &config);

        assert_eq!(result.losses, 0);
        assert!(result.hardest_words.is_empty());
    }

    #[test]
    fn session_rounds_never_repeat_consecutively() {
        let config = SimulationConfig::new(1, 10, "frequency");
        let records = play_session(&small_bank(), &config, 0);

        assert_eq!(records.len(), 10);
        for pair in records.windows(2) {
            assert_ne!(pair[0].secret, pair[1].secret);
        }
    }

    #[test]
    fn deterministic_for_same_seed() {
        let mut config = SimulationConfig::new(3, 4, "random");
        config.seed = 99;
        let a = run_simulation(&small_bank(), &config);
        let b = run_simulation(&small_bank(), &config);

        assert_eq!(a.wins, b.wins);
        assert_eq!(a.hardest_words, b.hardest_words);
        assert!((a.average_wrong - b.average_wrong).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_simulation() {
        let config = SimulationConfig::new(0, 5, "frequency");
        let result = run_simulation(&small_bank(), &config);

        assert_eq!(result.total_rounds, 0);
        assert_eq!(result.wins, 0);
        assert!(result.win_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn aggregate_ranks_hardest_words() {
        let record = |secret: &str, won: bool| RoundRecord {
            secret: secret.to_string(),
            won,
            wrong_guesses: if won { 2 } else { 6 },
            total_guesses: 8,
        };
        let records = vec![
            record("OWL", false),
            record("EMU", false),
            record("EMU", false),
            record("CAT", true),
        ];
        let result = aggregate("random", 6, &records, Duration::from_secs(1));

        assert_eq!(result.hardest_words, vec![(String::from("EMU"), 2), (String::from("OWL"), 1)]);
        assert_eq!(result.wrong_distribution.get(&2), Some(&1));
        assert!((result.win_rate - 0.25).abs() < f64::EPSILON);
    }
}
