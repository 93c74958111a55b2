//! Deterministic daily secret color
//!
//! The secret is a pure function of the calendar date. Every player on the
//! same day gets the same color, so the formula below is part of the puzzle
//! itself: changing any constant here changes every past and future puzzle.

use super::Color;
use chrono::{Datelike, NaiveDate};

/// Integer seed for a date: `year*10000 + month*100 + day`
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use chromacle::core::daily_seed;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// assert_eq!(daily_seed(date), 20_261_019);
/// ```
#[must_use]
pub fn daily_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Fractional part of `sin(seed) * 10000`, in `[0, 1)`
#[must_use]
pub fn seeded_random(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10_000.0;
    x - x.floor()
}

/// The secret color for a calendar date
///
/// Hue covers the whole wheel (0-359); saturation stays in 30-89 and
/// lightness in 25-74 so the secret is never washed out or near black.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use chromacle::core::daily_color;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(daily_color(date), daily_color(date));
/// ```
#[must_use]
pub fn daily_color(date: NaiveDate) -> Color {
    let seed = daily_seed(date);
    let h = (seeded_random(seed) * 360.0).floor() as u16;
    let s = (seeded_random(seed + 1) * 60.0).floor() as u8 + 30;
    let l = (seeded_random(seed + 2) * 50.0).floor() as u8 + 25;
    Color::new(h, s, l)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seed_uses_one_indexed_month() {
        assert_eq!(daily_seed(ymd(2024, 1, 1)), 20_240_101);
        assert_eq!(daily_seed(ymd(2025, 12, 31)), 20_251_231);
    }

    #[test]
    fn seeded_random_is_fractional() {
        for seed in 20_240_101..20_240_501 {
            let r = seeded_random(seed);
            assert!((0.0..1.0).contains(&r), "seed {seed} gave {r}");
        }
    }

    #[test]
    fn known_daily_colors() {
        // Pinned values: a change here breaks every player's puzzle
        assert_eq!(daily_color(ymd(2024, 1, 1)), Color::new(348, 74, 55));
        assert_eq!(daily_color(ymd(2025, 6, 15)), Color::new(25, 35, 53));
        assert_eq!(daily_color(ymd(2026, 10, 19)), Color::new(150, 80, 67));
    }

    #[test]
    fn same_date_same_color() {
        let date = ymd(2025, 3, 14);
        assert_eq!(daily_color(date), daily_color(date));
    }

    #[test]
    fn channels_stay_in_range_for_a_year() {
        let mut date = ymd(2025, 1, 1);
        let end = ymd(2026, 1, 1);
        while date < end {
            let c = daily_color(date);
            assert!(c.h < 360);
            assert!((30..=89).contains(&c.s), "{date}: s={}", c.s);
            assert!((25..=74).contains(&c.l), "{date}: l={}", c.l);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn consecutive_days_differ() {
        assert_ne!(daily_color(ymd(2025, 5, 1)), daily_color(ymd(2025, 5, 2)));
    }
}
