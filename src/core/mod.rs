//! Core domain types for hangman
//!
//! This module contains the fundamental value types with no game state.
//! All types here are pure and cheap to copy or clone.

mod letters;
mod reveal;
mod word;

pub use letters::LetterSet;
pub use reveal::Reveal;
pub use word::{Word, WordError};
