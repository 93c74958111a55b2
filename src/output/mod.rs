//! Terminal output formatting
//!
//! Share text plus display utilities for line-mode play.

pub mod display;
pub mod formatters;
mod share;

pub use display::{print_guesses, print_header, print_result, print_stats};
pub use share::{EMPTY_GLYPH, FAILURE_MARKER, closeness_glyph, format_share, glyph_row};
