//! Change notifications for presentation layers
//!
//! Every successful mutating command emits one or more `GameEvent`s to the
//! registered observers, together with a `SessionView` of the state after the
//! change. Ignored commands emit nothing.

use super::Status;
use crate::core::{Reveal, Word};
use std::fmt;

/// What changed in a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new letter was recorded
    Guessed { letter: char, hit: bool },
    /// The last guess revealed the whole secret
    RoundWon,
    /// The last guess used up the wrong-guess allowance
    RoundLost,
    /// A fresh round began
    RoundStarted { round: u32 },
}

/// Owned snapshot of everything a presentation layer reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub round: u32,
    pub status: Status,
    pub reveal: Reveal,
    pub guessed: Vec<char>,
    pub wrong: Vec<char>,
    pub wrong_count: usize,
    pub remaining: usize,
    pub max_wrong: u8,
    /// The secret, only disclosed once the round is over
    pub answer: Option<Word>,
}

impl SessionView {
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, Status::Playing)
    }
}

/// Callback invoked after each change
pub type Observer = Box<dyn FnMut(&GameEvent, &SessionView) + Send>;

/// Handle returned by `Session::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registered observers in subscription order
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub(crate) fn add(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, events: &[GameEvent], view: &SessionView) {
        for event in events {
            for (_, observer) in &mut self.entries {
                observer(event, view);
            }
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
