//! Distance scoring and per-channel hints
//!
//! Closeness is a weighted sum of channel differences: hue counts once
//! (circular, 0-180), saturation and lightness count double (linear, 0-100).
//! Lower is better; a guess wins at `total <= WIN_THRESHOLD`.

use super::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum attempts per daily session
pub const MAX_GUESSES: usize = 6;

/// A guess wins when its total distance is at most this
pub const WIN_THRESHOLD: u32 = 10;

/// Circular hue difference that counts as a hit
pub const HUE_HIT: u16 = 5;

/// Saturation/lightness difference that counts as a hit
pub const SL_HIT: u8 = 3;

/// Channel differences between two colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distance {
    pub h_diff: u16,
    pub s_diff: u8,
    pub l_diff: u8,
    pub total: u32,
}

impl Distance {
    /// Compute the distance between a guess and the secret
    ///
    /// Symmetric in its arguments.
    ///
    /// # Examples
    /// ```
    /// use chromacle::core::{Color, Distance};
    ///
    /// let d = Distance::between(Color::new(205, 58, 52), Color::new(200, 60, 50));
    /// assert_eq!(d.total, 5 + 2 * 2 + 2 * 2);
    /// assert!(!d.is_win());
    /// ```
    #[must_use]
    pub fn between(guess: Color, secret: Color) -> Self {
        let h_diff = hue_diff(guess.h, secret.h);
        let s_diff = guess.s.abs_diff(secret.s);
        let l_diff = guess.l.abs_diff(secret.l);
        let total = u32::from(h_diff) + 2 * u32::from(s_diff) + 2 * u32::from(l_diff);

        Self {
            h_diff,
            s_diff,
            l_diff,
            total,
        }
    }

    /// Whether this distance is close enough to win
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.total <= WIN_THRESHOLD
    }
}

/// Shortest way around the color wheel, 0-180
#[must_use]
pub fn hue_diff(a: u16, b: u16) -> u16 {
    let d = a.abs_diff(b) % 360;
    d.min(360 - d)
}

/// Feedback symbol for a single channel
///
/// Serializes as its glyph, which is also the persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hint {
    #[serde(rename = "🎯")]
    Hit,
    /// Rotate forward around the wheel (increase hue)
    #[serde(rename = "🔴→")]
    Clockwise,
    /// Rotate backward around the wheel (decrease hue)
    #[serde(rename = "←🔵")]
    CounterClockwise,
    #[serde(rename = "\u{2b06}\u{fe0f}")]
    More,
    #[serde(rename = "\u{2b07}\u{fe0f}")]
    Less,
    #[serde(rename = "\u{2600}\u{fe0f}")]
    Lighter,
    #[serde(rename = "🌑")]
    Darker,
}

impl Hint {
    /// Hue hint: hit within `HUE_HIT`, otherwise the shorter rotation
    ///
    /// # Examples
    /// ```
    /// use chromacle::core::Hint;
    ///
    /// assert_eq!(Hint::hue(350, 10), Hint::Clockwise);
    /// assert_eq!(Hint::hue(10, 350), Hint::CounterClockwise);
    /// assert_eq!(Hint::hue(358, 2), Hint::Hit);
    /// ```
    #[must_use]
    pub fn hue(guess: u16, target: u16) -> Self {
        if hue_diff(guess, target) <= HUE_HIT {
            return Self::Hit;
        }
        let forward = (i32::from(target) - i32::from(guess) + 360).rem_euclid(360);
        if forward < 180 {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }

    /// Saturation hint: hit within `SL_HIT`, otherwise more/less
    #[must_use]
    pub fn saturation(guess: u8, target: u8) -> Self {
        Self::linear(guess, target, Self::More, Self::Less)
    }

    /// Lightness hint: hit within `SL_HIT`, otherwise lighter/darker
    #[must_use]
    pub fn lightness(guess: u8, target: u8) -> Self {
        Self::linear(guess, target, Self::Lighter, Self::Darker)
    }

    fn linear(guess: u8, target: u8, up: Self, down: Self) -> Self {
        if guess.abs_diff(target) <= SL_HIT {
            Self::Hit
        } else if target > guess {
            up
        } else {
            down
        }
    }

    /// Glyph shown to the player
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Hit => "🎯",
            Self::Clockwise => "🔴→",
            Self::CounterClockwise => "←🔵",
            Self::More => "\u{2b06}\u{fe0f}",
            Self::Less => "\u{2b07}\u{fe0f}",
            Self::Lighter => "\u{2600}\u{fe0f}",
            Self::Darker => "🌑",
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
