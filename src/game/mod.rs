//! Game state: guesses, the daily session, cumulative stats
//!
//! `Session` is the pure state machine; `Game` binds it to today's secret and
//! a store.

mod engine;
mod session;
mod stats;

pub use engine::Game;
pub use session::{GameState, Guess, Session, SubmitOutcome};
pub use stats::Stats;
