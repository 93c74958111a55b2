//! Line-mode display of guesses, results and stats

use super::formatters::{closeness_bar, hint_row};
use crate::core::{Color, MAX_GUESSES};
use crate::game::{GameState, Guess, Stats};
use colored::Colorize;

/// Four-cell block painted in `color`
#[must_use]
pub fn swatch(color: Color) -> String {
    let [r, g, b] = color.to_rgb();
    "    ".on_truecolor(r, g, b).to_string()
}

/// Print the game banner
pub fn print_header(date: chrono::NaiveDate) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "CHROMACLE".bright_magenta().bold(),
        format!("guess the daily color · {}", date.format("%Y-%m-%d")).bright_black()
    );
    println!("{}", "═".repeat(60).cyan());
}

/// Print one scored guess
pub fn print_guess_row(turn: usize, guess: &Guess) {
    println!(
        "  {}. {} {} {:<22} {}  {}",
        turn.to_string().bright_black(),
        swatch(guess.color),
        guess.hex.bright_white().bold(),
        guess.color.to_string(),
        hint_row(guess),
        closeness_bar(guess.closeness, 12).green(),
    );
}

/// Print every guess so far
pub fn print_guesses(guesses: &[Guess]) {
    for (i, guess) in guesses.iter().enumerate() {
        print_guess_row(i + 1, guess);
    }
}

/// Print the end-of-game verdict, revealing the secret
pub fn print_result(state: GameState, guesses: &[Guess], secret: Color) {
    println!();
    match state {
        GameState::Won => {
            println!(
                "{}",
                format!("🎨 Nailed it in {}!", guesses.len()).green().bold()
            );
            println!("   Secret: {} {}", swatch(secret), secret.to_hex().bold());
            if let Some(last) = guesses.last() {
                println!("   Yours:  {} {}", swatch(last.color), last.hex.bold());
            }
        }
        GameState::Lost => {
            println!(
                "{}",
                format!("The color was {}", secret.to_hex()).red().bold()
            );
            println!("   {} {}", swatch(secret), secret);
        }
        GameState::InProgress => {
            let left = MAX_GUESSES.saturating_sub(guesses.len());
            println!("{left} of {MAX_GUESSES} guesses left");
        }
    }
}

/// Print the cumulative stats line
pub fn print_stats(stats: &Stats) {
    println!(
        "🔥 {}   ✅ {}/{}   🏆 {}   ({:.0}% won)",
        stats.streak.to_string().bright_yellow().bold(),
        stats.won,
        stats.played,
        stats.max_streak,
        stats.win_rate()
    );
}
