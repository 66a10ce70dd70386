//! Automatic players
//!
//! Strategies that drive a `Session` without a human, used by the simulator.

pub mod strategy;

pub use strategy::{FrequencyStrategy, LetterStrategy, RandomStrategy, StrategyType, is_consistent};
