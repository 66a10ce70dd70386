//! Interactive TUI front-end
//!
//! Drives a `Session` from key presses and redraws after every change.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
