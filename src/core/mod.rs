//! Core domain types for the daily color puzzle
//!
//! Pure, stateless building blocks: the color value and its hex codec, the
//! date-derived secret, and distance/hint scoring.

mod color;
mod daily;
mod score;

pub use color::{Color, ColorError};
pub use daily::{daily_color, daily_seed, seeded_random};
pub use score::{Distance, HUE_HIT, Hint, MAX_GUESSES, SL_HIT, WIN_THRESHOLD, hue_diff};
