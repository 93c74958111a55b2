//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: type `h s l` triples at the prompt.

use crate::core::Color;
use crate::game::{Game, SubmitOutcome};
use crate::output::display::print_guess_row;
use crate::output::{print_guesses, print_header, print_result, print_stats};
use crate::storage::KeyValueStore;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// Resumes today's session if one is stored. Returns when the game ends or
/// the player quits.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: KeyValueStore>(game: &mut Game<S>) -> Result<(), String> {
    print_header(game.date());
    print_stats(game.stats());

    println!("\nMatch today's color by hue (0-359), saturation and lightness (0-100).");
    println!("Hints after each guess:");
    println!("  🎯 on target   🔴→ / ←🔵 rotate hue   ⬆️ / ⬇️ saturation   ☀️ / 🌑 lightness");
    println!("Enter a guess like '200 60 50' or 'hsl(200, 60%, 50%)'. 'quit' to exit.\n");

    if !game.session().guesses.is_empty() {
        println!("Resuming today's game:");
        print_guesses(&game.session().guesses);
    }

    while !game.state().is_terminal() {
        let turn = game.session().guesses.len() + 1;
        let input = get_user_input(&format!("Guess {turn}/{}", crate::core::MAX_GUESSES))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Progress saved. Come back before midnight!\n");
                return Ok(());
            }
            "" => continue,
            text => match text.parse::<Color>() {
                Ok(color) => {
                    let outcome = game.submit_guess(color);
                    if outcome != SubmitOutcome::Rejected
                        && let Some(guess) = game.session().last_guess()
                    {
                        print_guess_row(turn, guess);
                    }
                }
                Err(e) => println!("❌ {e}"),
            },
        }
    }

    finish(game);
    Ok(())
}

/// Print the verdict, stats and share text for a finished game
pub fn finish<S: KeyValueStore>(game: &Game<S>) {
    print_result(game.state(), &game.session().guesses, game.secret());
    println!();
    print_stats(game.stats());
    println!("\n{}\n", game.share_text());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        // stdin closed
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
