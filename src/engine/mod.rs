//! Hangman game engine
//!
//! The engine is a single finite-state `Session`: it owns the word bank, the
//! active secret, the guess history and the round status. Presentation layers
//! drive it through `guess` and `start_new_round`, read derived state through
//! its accessors, and can subscribe to change notifications.

mod bank;
mod config;
mod error;
mod event;
mod selection;
mod session;

pub use bank::WordBank;
pub use config::GameConfig;
pub use error::GameError;
pub use event::{GameEvent, Observer, SessionView, SubscriptionId};
pub use selection::pick_secret;
pub use session::{GuessOutcome, IgnoreReason, Session, Status};
