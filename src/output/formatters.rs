//! Formatting utilities for terminal output

use crate::core::WIN_THRESHOLD;
use crate::game::Guess;

/// Worst possible closeness: opposite hue, full saturation and lightness gap
pub const MAX_CLOSENESS: u32 = 180 + 2 * 100 + 2 * 100;

/// Hue, saturation and lightness hints separated by spaces
#[must_use]
pub fn hint_row(guess: &Guess) -> String {
    guess
        .hints()
        .iter()
        .map(|h| h.glyph())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar that fills as a guess gets closer to the secret
///
/// Full at the win threshold, empty at the worst possible distance.
#[must_use]
pub fn closeness_bar(closeness: u32, width: usize) -> String {
    let span = f64::from(MAX_CLOSENESS - WIN_THRESHOLD);
    let remaining = f64::from(closeness.saturating_sub(WIN_THRESHOLD));
    create_progress_bar(span - remaining, span, width)
}
