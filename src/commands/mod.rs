//! Command implementations

pub mod guess;
pub mod simple;

pub use guess::{print_share, print_summary, run_guess};
pub use simple::run_simple;
