//! Chromacle
//!
//! A daily color puzzle: tune hue, saturation and lightness to match a secret
//! color derived from the calendar date, in at most six guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use chromacle::core::Color;
//! use chromacle::game::{Game, SubmitOutcome};
//! use chromacle::storage::MemoryStore;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let mut game = Game::load(MemoryStore::new(), date);
//!
//! let outcome = game.submit_guess(Color::new(180, 50, 50));
//! assert_ne!(outcome, SubmitOutcome::Rejected);
//! println!("{}", game.session().guesses[0].hex);
//! ```

// Core domain types
pub mod core;

// Session state machine and stats
pub mod game;

// Keyed persistence
pub mod storage;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
