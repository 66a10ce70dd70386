//! Hangman
//!
//! A hangman game engine with terminal front-ends and a strategy simulator.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::engine::{GameConfig, GuessOutcome, Session, WordBank};
//!
//! let bank = WordBank::from_strs(&["cat", "dog"]).unwrap();
//! let mut session = Session::with_seed(bank, GameConfig::default(), 7);
//!
//! let outcome = session.guess("o");
//! println!("{outcome:?}: {}", session.reveal_pattern());
//! assert_ne!(outcome, GuessOutcome::Lost);
//! ```

// Core domain types
pub mod core;

// Game state engine
pub mod engine;

// Word lists
pub mod wordlists;

// Automatic letter strategies
pub mod autoplay;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
