//! One-shot commands: submit a single guess, print share text or stats

use super::simple::finish;
use crate::core::Color;
use crate::game::{Game, SubmitOutcome};
use crate::output::display::print_guess_row;
use crate::output::{print_guesses, print_result, print_stats};
use crate::storage::KeyValueStore;

/// Submit one guess against today's secret and print where the game stands
///
/// # Errors
///
/// Returns an error if today's game is already over.
pub fn run_guess<S: KeyValueStore>(game: &mut Game<S>, color: Color) -> Result<SubmitOutcome, String> {
    let outcome = game.submit_guess(color);
    if outcome == SubmitOutcome::Rejected {
        return Err(format!(
            "Today's game is already over. The color was {}.",
            game.secret().to_hex()
        ));
    }

    let guesses = &game.session().guesses;
    print_guesses(&guesses[..guesses.len() - 1]);
    if let Some(guess) = guesses.last() {
        print_guess_row(guesses.len(), guess);
    }

    if outcome.finished_game() {
        finish(game);
    } else {
        print_result(game.state(), guesses, game.secret());
    }
    Ok(outcome)
}

/// Print today's share text and return it
///
/// # Errors
///
/// Returns an error if today's game is still in progress.
pub fn print_share<S: KeyValueStore>(game: &Game<S>) -> Result<String, String> {
    if !game.state().is_terminal() {
        return Err(format!(
            "Today's game is still in progress ({} guesses left).",
            game.session().attempts_left()
        ));
    }
    let text = game.share_text();
    println!("{text}");
    Ok(text)
}

/// Print cumulative stats and today's progress
pub fn print_summary<S: KeyValueStore>(game: &Game<S>) {
    print_stats(game.stats());
    if !game.session().guesses.is_empty() {
        println!();
        print_guesses(&game.session().guesses);
        if game.state().is_terminal() {
            print_result(game.state(), &game.session().guesses, game.secret());
        }
    }
}
