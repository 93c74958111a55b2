//! One calendar day's game: the guess log and its state transitions

use crate::core::{Color, Distance, Hint, MAX_GUESSES};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scored attempt
///
/// Persisted as `{h, s, l, hex, hHint, sHint, lHint, closeness}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    #[serde(flatten)]
    pub color: Color,
    pub hex: String,
    pub h_hint: Hint,
    pub s_hint: Hint,
    pub l_hint: Hint,
    pub closeness: u32,
}

impl Guess {
    /// Score `color` against the secret
    #[must_use]
    pub fn score(color: Color, secret: Color) -> Self {
        Self {
            color,
            hex: color.to_hex(),
            h_hint: Hint::hue(color.h, secret.h),
            s_hint: Hint::saturation(color.s, secret.s),
            l_hint: Hint::lightness(color.l, secret.l),
            closeness: Distance::between(color, secret).total,
        }
    }

    /// The three hints in hue, saturation, lightness order
    #[must_use]
    pub const fn hints(&self) -> [Hint; 3] {
        [self.h_hint, self.s_hint, self.l_hint]
    }

    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.closeness <= crate::core::WIN_THRESHOLD
    }
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The game had already ended; nothing changed
    Rejected,
    /// Guess recorded, attempts remain
    Continue,
    /// Guess recorded and it won the game
    Won,
    /// Guess recorded and it used the last attempt
    Lost,
}

impl SubmitOutcome {
    /// Whether this submission moved the game into a terminal state
    #[inline]
    #[must_use]
    pub const fn finished_game(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A day's session
///
/// Persisted as `{date, guesses, gameOver, won}` with an ISO `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub date: NaiveDate,
    pub guesses: Vec<Guess>,
    pub game_over: bool,
    pub won: bool,
}

impl Session {
    /// Fresh session for `date`
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            guesses: Vec::new(),
            game_over: false,
            won: false,
        }
    }

    /// Current state, derived from the flags
    #[must_use]
    pub const fn state(&self) -> GameState {
        if self.won {
            GameState::Won
        } else if self.game_over {
            GameState::Lost
        } else {
            GameState::InProgress
        }
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess> {
        self.guesses.last()
    }

    /// Best (lowest) closeness so far
    #[must_use]
    pub fn best_closeness(&self) -> Option<u32> {
        self.guesses.iter().map(|g| g.closeness).min()
    }

    /// Whether the flags agree with the guess log
    ///
    /// Holds for every session built through [`Session::submit`]; a stored
    /// session failing it was edited or written by something else.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let count = self.guesses.len();
        let last_won = self.last_guess().is_some_and(Guess::is_win);
        let earlier_won = self.guesses[..count.saturating_sub(1)]
            .iter()
            .any(Guess::is_win);

        count <= MAX_GUESSES
            && !earlier_won
            && self.won == last_won
            && self.game_over == (self.won || count == MAX_GUESSES)
    }

    /// Score `color` against `secret` and advance the state machine
    ///
    /// A no-op returning [`SubmitOutcome::Rejected`] once the game is over.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use chromacle::core::Color;
    /// use chromacle::game::{Session, SubmitOutcome};
    ///
    /// let secret = Color::new(200, 60, 50);
    /// let mut session = Session::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    ///
    /// assert_eq!(session.submit(Color::new(20, 60, 50), secret), SubmitOutcome::Continue);
    /// assert_eq!(session.submit(Color::new(202, 61, 50), secret), SubmitOutcome::Won);
    /// assert_eq!(session.submit(Color::new(200, 60, 50), secret), SubmitOutcome::Rejected);
    /// ```
    pub fn submit(&mut self, color: Color, secret: Color) -> SubmitOutcome {
        if self.state().is_terminal() || self.guesses.len() >= MAX_GUESSES {
            return SubmitOutcome::Rejected;
        }

        let guess = Guess::score(color, secret);
        let won = guess.is_win();
        self.guesses.push(guess);

        if won {
            self.won = true;
            self.game_over = true;
            SubmitOutcome::Won
        } else if self.guesses.len() >= MAX_GUESSES {
            self.game_over = true;
            SubmitOutcome::Lost
        } else {
            SubmitOutcome::Continue
        }
    }
}
