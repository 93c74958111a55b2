//! Interactive TUI mode
//!
//! Slider-driven play built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Channel, run_tui};
