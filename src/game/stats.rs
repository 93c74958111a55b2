//! Cumulative results across days

use serde::{Deserialize, Serialize};

/// Aggregate statistics
///
/// Persisted as `{played, won, streak, maxStreak}`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub played: u32,
    pub won: u32,
    pub streak: u32,
    pub max_streak: u32,
}

impl Stats {
    /// Record one completed session
    ///
    /// # Examples
    /// ```
    /// use chromacle::game::Stats;
    ///
    /// let mut stats = Stats::default();
    /// stats.record(true);
    /// stats.record(true);
    /// stats.record(false);
    /// assert_eq!((stats.played, stats.won, stats.streak, stats.max_streak), (3, 2, 0, 2));
    /// ```
    pub fn record(&mut self, won: bool) {
        self.played = self.played.saturating_add(1);
        if won {
            self.won = self.won.saturating_add(1);
            self.streak = self.streak.saturating_add(1);
            self.max_streak = self.max_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
    }

    /// Whether the counters can have come from a run of [`Stats::record`]
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.won <= self.played && self.streak <= self.max_streak && self.max_streak <= self.won
    }

    /// Percentage of played sessions won, 0 when nothing played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played) * 100.0
        }
    }
}
