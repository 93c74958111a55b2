//! Shareable result text
//!
//! ```text
//! 🎨 Chromacle 6/15/2025
//! 🟥🟧🟨🟩⬛⬛ 4/6
//!
//! chromacle.app
//! ```

use crate::core::MAX_GUESSES;
use crate::game::Session;

/// Placeholder for an unused attempt
pub const EMPTY_GLYPH: char = '⬛';

/// Shown instead of the guess count when the game was lost
pub const FAILURE_MARKER: char = 'X';

const FOOTER: &str = "chromacle.app";

/// Severity square for a closeness score
#[must_use]
pub const fn closeness_glyph(closeness: u32) -> char {
    match closeness {
        0..=10 => '🟩',
        11..=30 => '🟨',
        31..=60 => '🟧',
        _ => '🟥',
    }
}

/// The glyph row alone, padded to `MAX_GUESSES`
#[must_use]
pub fn glyph_row(session: &Session) -> String {
    let mut row: String = session
        .guesses
        .iter()
        .map(|g| closeness_glyph(g.closeness))
        .collect();
    for _ in session.guesses.len()..MAX_GUESSES {
        row.push(EMPTY_GLYPH);
    }
    row
}

/// Render a session as share text
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use chromacle::core::Color;
/// use chromacle::game::Session;
/// use chromacle::output::format_share;
///
/// let secret = Color::new(200, 60, 50);
/// let mut session = Session::new(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
/// session.submit(Color::new(200, 60, 50), secret);
///
/// assert_eq!(format_share(&session), "🎨 Chromacle 6/15/2025\n🟩⬛⬛⬛⬛⬛ 1/6\n\nchromacle.app");
/// ```
#[must_use]
pub fn format_share(session: &Session) -> String {
    let result = if session.won {
        session.guesses.len().to_string()
    } else {
        FAILURE_MARKER.to_string()
    };

    format!(
        "🎨 Chromacle {}\n{} {result}/{MAX_GUESSES}\n\n{FOOTER}",
        session.date.format("%-m/%-d/%Y"),
        glyph_row(session),
    )
}
