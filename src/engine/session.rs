//! The hangman game session
//!
//! A `Session` owns the word bank, the active secret, the letters guessed this
//! round and the round status. It accepts two commands, `guess` and
//! `start_new_round`, and exposes everything else as read-only derived state.

use super::event::Observers;
use super::selection::pick_secret;
use super::{GameConfig, GameEvent, SessionView, SubscriptionId, WordBank};
use crate::core::{LetterSet, Reveal, Word};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, info};

/// Round status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "Playing"),
            Self::Won => write!(f, "Won"),
            Self::Lost => write!(f, "Lost"),
        }
    }
}

/// Why a guess left the session untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Input was not exactly one ASCII letter
    NotALetter,
    /// The letter was already guessed this round
    AlreadyGuessed,
    /// The round is already won or lost
    RoundOver,
}

/// Result of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the secret; round continues
    Hit,
    /// Letter is not in the secret; round continues
    Miss,
    /// Letter completed the secret
    Won,
    /// Letter used up the last wrong guess
    Lost,
    /// Nothing changed
    Ignored(IgnoreReason),
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_ignored(self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// A single-player hangman session spanning any number of rounds
///
/// Randomness is injected through `R` so that secret selection can be made
/// deterministic with [`Session::with_seed`] or [`Session::with_rng`].
///
/// # Examples
/// ```
/// use hangman::engine::{GameConfig, Session, Status, WordBank};
///
/// let bank = WordBank::from_strs(&["cat"]).unwrap();
/// let mut session = Session::with_seed(bank, GameConfig::default(), 1);
///
/// session.guess("c");
/// session.guess("A");
/// assert_eq!(session.reveal_pattern().to_string(), "C A _");
///
/// session.guess("t");
/// assert_eq!(session.status(), Status::Won);
/// ```
#[derive(Debug)]
pub struct Session<R = StdRng> {
    bank: WordBank,
    config: GameConfig,
    rng: R,
    secret: Word,
    previous_secret: Option<Word>,
    guessed: LetterSet,
    wrong: LetterSet,
    status: Status,
    round: u32,
    observers: Observers,
}

impl Session<StdRng> {
    /// Create a session seeded from the operating system
    #[must_use]
    pub fn new(bank: WordBank, config: GameConfig) -> Self {
        Self::with_rng(bank, config, StdRng::from_os_rng())
    }

    /// Create a session whose secret sequence is fixed by `seed`
    #[must_use]
    pub fn with_seed(bank: WordBank, config: GameConfig, seed: u64) -> Self {
        Self::with_rng(bank, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Create a session drawing secrets from `rng`
    ///
    /// Round 1 picks from the whole bank.
    pub fn with_rng(bank: WordBank, config: GameConfig, mut rng: R) -> Self {
        let secret = pick_secret(&bank, None, &mut rng).clone();
        info!(
            words = bank.len(),
            max_wrong = config.max_wrong_guesses(),
            "session created"
        );

        Self {
            bank,
            config,
            rng,
            secret,
            previous_secret: None,
            guessed: LetterSet::new(),
            wrong: LetterSet::new(),
            status: Status::Playing,
            round: 1,
            observers: Observers::default(),
        }
    }

    /// Submit raw input as a guess
    ///
    /// Anything other than exactly one ASCII letter is ignored, as is any
    /// guess while the round is over or of a letter already guessed.
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        if self.status != Status::Playing {
            return GuessOutcome::Ignored(IgnoreReason::RoundOver);
        }

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.guess_char(c),
            _ => {
                debug!(input_len = input.len(), "ignored non-letter input");
                GuessOutcome::Ignored(IgnoreReason::NotALetter)
            }
        }
    }

    /// Submit a single character as a guess
    pub fn guess_char(&mut self, input: char) -> GuessOutcome {
        if self.status != Status::Playing {
            return GuessOutcome::Ignored(IgnoreReason::RoundOver);
        }
        if !input.is_ascii_alphabetic() {
            debug!(?input, "ignored non-letter input");
            return GuessOutcome::Ignored(IgnoreReason::NotALetter);
        }

        let letter = input.to_ascii_uppercase();
        if !self.guessed.insert(letter) {
            debug!(%letter, "ignored repeated guess");
            return GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed);
        }

        let hit = self.secret.has_letter(letter);
        if !hit {
            self.wrong.insert(letter);
        }
        self.status = self.evaluate();

        debug!(
            round = self.round,
            %letter,
            hit,
            wrong = self.wrong.len(),
            "guess recorded"
        );

        let guessed = GameEvent::Guessed { letter, hit };
        match self.status {
            Status::Won => {
                info!(round = self.round, secret = %self.secret, "round won");
                self.emit(&[guessed, GameEvent::RoundWon]);
                GuessOutcome::Won
            }
            Status::Lost => {
                info!(round = self.round, secret = %self.secret, "round lost");
                self.emit(&[guessed, GameEvent::RoundLost]);
                GuessOutcome::Lost
            }
            Status::Playing => {
                self.emit(&[guessed]);
                if hit { GuessOutcome::Hit } else { GuessOutcome::Miss }
            }
        }
    }

    /// Begin the next round with a fresh secret
    ///
    /// The new secret differs from the one just played whenever the bank
    /// offers another word. Works from any status, including mid-round.
    pub fn start_new_round(&mut self) {
        let next = pick_secret(&self.bank, Some(&self.secret), &mut self.rng).clone();
        self.previous_secret = Some(std::mem::replace(&mut self.secret, next));
        self.guessed.clear();
        self.wrong.clear();
        self.status = Status::Playing;
        self.round = self.round.saturating_add(1);

        info!(round = self.round, "round started");
        self.emit(&[GameEvent::RoundStarted { round: self.round }]);
    }
}

impl<R> Session<R> {
    fn evaluate(&self) -> Status {
        if self.guessed.is_superset(self.secret.letters()) {
            Status::Won
        } else if self.wrong.len() >= usize::from(self.config.max_wrong_guesses()) {
            Status::Lost
        } else {
            Status::Playing
        }
    }

    fn emit(&mut self, events: &[GameEvent]) {
        if self.observers.is_empty() {
            return;
        }
        let view = self.snapshot();
        self.observers.notify(events, &view);
    }

    /// Register a change observer
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent, &SessionView) + Send + 'static,
    {
        let id = self.observers.add(Box::new(observer));
        debug!(observers = self.observers.len(), "observer subscribed");
        id
    }

    /// Remove a previously registered observer
    ///
    /// Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    /// Secret with unguessed positions masked
    #[must_use]
    pub fn reveal_pattern(&self) -> Reveal {
        Reveal::calculate(&self.secret, self.guessed)
    }

    /// Wrong guesses left before the round is lost
    #[must_use]
    pub fn remaining_wrong_allowance(&self) -> usize {
        usize::from(self.config.max_wrong_guesses()).saturating_sub(self.wrong.len())
    }

    #[must_use]
    pub const fn wrong_guess_count(&self) -> usize {
        self.wrong.len()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != Status::Playing
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.status == Status::Won
    }

    /// Letters guessed this round, alphabetically
    #[must_use]
    pub fn guessed_letters_sorted(&self) -> Vec<char> {
        self.guessed.to_sorted_vec()
    }

    /// Wrong letters this round, alphabetically
    #[must_use]
    pub fn wrong_letters_sorted(&self) -> Vec<char> {
        self.wrong.to_sorted_vec()
    }

    #[must_use]
    pub const fn guessed_letters(&self) -> LetterSet {
        self.guessed
    }

    #[must_use]
    pub const fn wrong_letters(&self) -> LetterSet {
        self.wrong
    }

    /// Whether `letter` (any case) was guessed this round
    #[must_use]
    pub const fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(letter.to_ascii_uppercase())
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn round_number(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn previous_secret(&self) -> Option<&Word> {
        self.previous_secret.as_ref()
    }

    #[must_use]
    pub const fn max_wrong_guesses(&self) -> u8 {
        self.config.max_wrong_guesses()
    }

    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Everything a presentation layer needs, as an owned value
    #[must_use]
    pub fn snapshot(&self) -> SessionView {
        SessionView {
            round: self.round,
            status: self.status,
            reveal: self.reveal_pattern(),
            guessed: self.guessed_letters_sorted(),
            wrong: self.wrong_letters_sorted(),
            wrong_count: self.wrong_guess_count(),
            remaining: self.remaining_wrong_allowance(),
            max_wrong: self.max_wrong_guesses(),
            answer: self.is_over().then(|| self.secret.clone()),
        }
    }
}
