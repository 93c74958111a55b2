//! HSL color value and its hex display form
//!
//! A `Color` is the integer triple the sliders produce: hue in degrees
//! (0-359), saturation and lightness in percent (0-100).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An HSL color with integer channels
///
/// Serializes as `{"h": .., "s": .., "l": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Error type for color text that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    WrongComponentCount(usize),
    InvalidNumber(String),
    HueOutOfRange(u32),
    SaturationOutOfRange(u32),
    LightnessOutOfRange(u32),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongComponentCount(n) => {
                write!(f, "Expected 3 values (hue saturation lightness), got {n}")
            }
            Self::InvalidNumber(s) => write!(f, "'{s}' is not a whole number"),
            Self::HueOutOfRange(h) => write!(f, "Hue must be 0-359, got {h}"),
            Self::SaturationOutOfRange(s) => write!(f, "Saturation must be 0-100, got {s}"),
            Self::LightnessOutOfRange(l) => write!(f, "Lightness must be 0-100, got {l}"),
        }
    }
}

impl std::error::Error for ColorError {}

impl Color {
    /// Create a color, wrapping hue into 0-359 and clamping saturation and
    /// lightness to 100
    ///
    /// # Examples
    /// ```
    /// use chromacle::core::Color;
    ///
    /// let c = Color::new(370, 120, 50);
    /// assert_eq!((c.h, c.s, c.l), (10, 100, 50));
    /// ```
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: if s > 100 { 100 } else { s },
            l: if l > 100 { 100 } else { l },
        }
    }

    /// Convert to 8-bit RGB channels
    ///
    /// Standard piecewise HSL conversion by 60° sextant. Each channel is
    /// rounded half away from zero and clamped to 0-255.
    #[must_use]
    pub fn to_rgb(self) -> [u8; 3] {
        let h = f64::from(self.h);
        let s = f64::from(self.s);
        let l = f64::from(self.l);

        let c = (1.0 - (2.0 * l / 100.0 - 1.0).abs()) * s / 100.0;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l / 100.0 - c / 2.0;

        let (r, g, b) = match self.h {
            0..60 => (c, x, 0.0),
            60..120 => (x, c, 0.0),
            120..180 => (0.0, c, x),
            180..240 => (0.0, x, c),
            240..300 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [channel(r), channel(g), channel(b)]
    }

    /// Canonical `#rrggbb` display string
    ///
    /// # Examples
    /// ```
    /// use chromacle::core::Color;
    ///
    /// assert_eq!(Color::new(200, 60, 50).to_hex(), "#3399cc");
    /// assert_eq!(Color::new(0, 100, 50).to_hex(), "#ff0000");
    /// ```
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parse `"200 60 50"`, `"200,60,50"` or `"hsl(200, 60%, 50%)"`
    ///
    /// Unlike [`Color::new`], out-of-range values are rejected rather than
    /// wrapped or clamped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix("hsl(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(|p| p.trim_end_matches(['%', '°']))
            .filter(|p| !p.is_empty())
            .collect();

        if parts.len() != 3 {
            return Err(ColorError::WrongComponentCount(parts.len()));
        }

        let mut values = [0u32; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| ColorError::InvalidNumber((*part).to_string()))?;
        }

        let [h, s, l] = values;
        if h >= 360 {
            return Err(ColorError::HueOutOfRange(h));
        }
        if s > 100 {
            return Err(ColorError::SaturationOutOfRange(s));
        }
        if l > 100 {
            return Err(ColorError::LightnessOutOfRange(l));
        }

        Ok(Self::new(h as u16, s as u8, l as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wraps_hue_and_clamps_percentages() {
        assert_eq!(Color::new(360, 50, 50).h, 0);
        assert_eq!(Color::new(719, 50, 50).h, 359);
        assert_eq!(Color::new(10, 255, 50).s, 100);
        assert_eq!(Color::new(10, 50, 101).l, 100);
    }

    #[test]
    fn hex_primaries() {
        assert_eq!(Color::new(0, 100, 50).to_hex(), "#ff0000");
        assert_eq!(Color::new(120, 100, 50).to_hex(), "#00ff00");
        assert_eq!(Color::new(240, 100, 50).to_hex(), "#0000ff");
    }

    #[test]
    fn hex_black_white_gray() {
        assert_eq!(Color::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Color::new(0, 0, 100).to_hex(), "#ffffff");
        // 127.5 rounds up
        assert_eq!(Color::new(0, 0, 50).to_hex(), "#808080");
    }

    #[test]
    fn hex_every_sextant() {
        assert_eq!(Color::new(30, 100, 50).to_hex(), "#ff8000");
        assert_eq!(Color::new(180, 50, 50).to_hex(), "#40bfbf");
        assert_eq!(Color::new(200, 60, 50).to_hex(), "#3399cc");
        assert_eq!(Color::new(205, 58, 52).to_hex(), "#3e90cc");
        assert_eq!(Color::new(150, 80, 67).to_hex(), "#68eeab");
        assert_eq!(Color::new(348, 74, 55).to_hex(), "#e13759");
    }

    #[test]
    fn hex_is_always_well_formed() {
        for h in (0..360).step_by(7) {
            for s in (0..=100).step_by(9) {
                for l in (0..=100).step_by(9) {
                    let hex = Color::new(h, s, l).to_hex();
                    assert_eq!(hex.len(), 7, "{hex}");
                    assert!(hex.starts_with('#'));
                    assert!(u32::from_str_radix(&hex[1..], 16).is_ok(), "{hex}");
                }
            }
        }
    }

    #[test]
    fn parse_accepts_common_forms() {
        let expected = Color::new(200, 60, 50);
        assert_eq!("200 60 50".parse::<Color>(), Ok(expected));
        assert_eq!("200,60,50".parse::<Color>(), Ok(expected));
        assert_eq!(" 200, 60%, 50% ".parse::<Color>(), Ok(expected));
        assert_eq!("hsl(200, 60%, 50%)".parse::<Color>(), Ok(expected));
        assert_eq!("200° 60 50".parse::<Color>(), Ok(expected));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "200 60".parse::<Color>(),
            Err(ColorError::WrongComponentCount(2))
        );
        assert_eq!(
            "200 sixty 50".parse::<Color>(),
            Err(ColorError::InvalidNumber("sixty".to_string()))
        );
        assert_eq!(
            "360 60 50".parse::<Color>(),
            Err(ColorError::HueOutOfRange(360))
        );
        assert_eq!(
            "200 101 50".parse::<Color>(),
            Err(ColorError::SaturationOutOfRange(101))
        );
        assert_eq!(
            "200 60 -5".parse::<Color>(),
            Err(ColorError::InvalidNumber("-5".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let c = Color::new(12, 34, 56);
        assert_eq!(c.to_string(), "hsl(12, 34%, 56%)");
        assert_eq!(c.to_string().parse::<Color>(), Ok(c));
    }

    #[test]
    fn serializes_as_hsl_object() {
        let json = serde_json::to_string(&Color::new(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"h":1,"s":2,"l":3}"#);
    }
}
