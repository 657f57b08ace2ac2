//! The 8-bit RGB [`Color`] type and its hex and HSL representations.
//!
//! Hex strings are the canonical exchange format: `from_hex` accepts an
//! optional leading `#` and either case, `to_hex` always produces
//! `#RRGGBB` in uppercase. Colors serialize as that hex string.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FusionError;
use crate::prng::Xorshift64;

/// Placeholder text shown in the first color input before anything is typed.
pub const FIRST_PLACEHOLDER: &str = "Enter Color 1 Hex Code";

/// Placeholder text shown in the second color input before anything is typed.
pub const SECOND_PLACEHOLDER: &str = "Enter Color 2 Hex Code";

/// An opaque RGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue, saturation, and lightness, rounded for display.
///
/// `hue` is in degrees `[0, 360]`, `saturation` and `lightness` are
/// percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the channels as `[r, g, b]`.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Builds a color from `[r, g, b]`.
    pub const fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like `"#FF00AA"` or `"ff00aa"`.
    ///
    /// The two input placeholders decode to fixed defaults instead of failing:
    /// [`FIRST_PLACEHOLDER`] is black and [`SECOND_PLACEHOLDER`] is white.
    ///
    /// Returns `FusionError::InvalidHexLength` if the text (after one leading
    /// `#` is removed) is not exactly 6 characters, and
    /// `FusionError::InvalidHexDigits` if any pair is not base-16.
    pub fn from_hex(text: &str) -> Result<Color, FusionError> {
        match text {
            FIRST_PLACEHOLDER => return Ok(Color::BLACK),
            SECOND_PLACEHOLDER => return Ok(Color::WHITE),
            _ => {}
        }

        let hex = text.strip_prefix('#').unwrap_or(text);
        let digits: Vec<char> = hex.chars().collect();
        if digits.len() != 6 {
            return Err(FusionError::InvalidHexLength { len: digits.len() });
        }

        let mut channels = [0u8; 3];
        for (channel, pair) in channels.iter_mut().zip(digits.chunks_exact(2)) {
            *channel = parse_pair(pair)?;
        }
        Ok(Color::from_channels(channels))
    }

    /// Formats the color as `#RRGGBB` with uppercase digits.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts to HSL using the standard hexcone model.
    ///
    /// Achromatic colors report hue 0 and saturation 0. A hue just below a
    /// full turn rounds to 360, as the popup shows it.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        let (hue, saturation) = if max == min {
            (0.0, 0.0)
        } else {
            let delta = max - min;
            let saturation = if lightness <= 0.5 {
                delta / (max + min)
            } else {
                delta / (2.0 - max - min)
            };
            let sector = if max == r {
                (g - b) / delta
            } else if max == g {
                2.0 + (b - r) / delta
            } else {
                4.0 + (r - g) / delta
            };
            ((sector / 6.0).rem_euclid(1.0), saturation)
        };

        Hsl {
            hue: (hue * 360.0).round() as u16,
            saturation: (saturation * 100.0).round() as u8,
            lightness: (lightness * 100.0).round() as u8,
        }
    }

    /// Draws a uniformly random color from the generator.
    pub fn random(rng: &mut Xorshift64) -> Color {
        let [r, g, b, ..] = rng.next_u64().to_be_bytes();
        Color::new(r, g, b)
    }
}

/// Parses two hex digit characters into one channel byte.
fn parse_pair(pair: &[char]) -> Result<u8, FusionError> {
    match (pair[0].to_digit(16), pair[1].to_digit(16)) {
        (Some(hi), Some(lo)) => Ok((hi * 16 + lo) as u8),
        _ => Err(FusionError::InvalidHexDigits(pair.iter().collect())),
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
