//! Formatting utilities for terminal output

/// Gallows drawings from empty to complete
const GALLOWS: [[&str; 6]; 7] = [
    ["  +---+", "  |   |", "      |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "========="],
];

/// Gallows stage for `wrong` misses out of `max`
///
/// The six body parts are spread over the allowance so the figure is complete
/// exactly when the round is lost.
#[must_use]
pub fn gallows_stage(wrong: usize, max: usize) -> usize {
    if max == 0 {
        return GALLOWS.len() - 1;
    }
    let parts = GALLOWS.len() - 1;
    (wrong * parts / max).min(parts)
}

/// Gallows drawing lines for the given progress
#[must_use]
pub fn gallows(wrong: usize, max: usize) -> &'static [&'static str] {
    &GALLOWS[gallows_stage(wrong, max)]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many wrong guesses remain
#[must_use]
pub fn allowance_bar(remaining: usize, max: usize, width: usize) -> String {
    create_progress_bar(remaining as f64, max.max(1) as f64, width)
}

/// Letters as a space-separated string, or a dash when there are none
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
