//! Brightness-driven contrast decisions for text and accent colors.
//!
//! Brightness uses the ITU-R BT.601 luma weights. The dark/light split is a
//! fixed two-tone decision, not a contrast-ratio calculation.

use crate::color::Color;

/// Colors with brightness strictly below this are dark.
pub const DARK_THRESHOLD: f64 = 123.0;

/// Text color used on dark backgrounds.
pub const LIGHT_TEXT: Color = Color::new(0xEF, 0xF0, 0xF1);

/// Text color used on light backgrounds.
pub const DARK_TEXT: Color = Color::new(0x31, 0x36, 0x3B);

/// Lowest channel value `adjust_brightness` will produce by default.
pub const DEFAULT_CHANNEL_FLOOR: u8 = 30;

/// Factor that lifts an accent off a dark base.
pub const LIGHTEN_FACTOR: f64 = 1.5;

/// Factor that sinks an accent below a light base.
pub const DARKEN_FACTOR: f64 = 0.8;

/// Perceived brightness in `[0, 255]`: `(299 r + 587 g + 114 b) / 1000`.
pub fn brightness(color: Color) -> f64 {
    let weighted =
        u32::from(color.r) * 299 + u32::from(color.g) * 587 + u32::from(color.b) * 114;
    f64::from(weighted) / 1000.0
}

pub fn is_dark(color: Color) -> bool {
    brightness(color) < DARK_THRESHOLD
}

/// Near-white text on dark colors, near-black text on light ones.
pub fn legible_text_color(color: Color) -> Color {
    if is_dark(color) {
        LIGHT_TEXT
    } else {
        DARK_TEXT
    }
}

/// Scales every channel by `factor`, truncating toward zero, then clamps
/// each channel to `[floor, 255]`.
pub fn adjust_brightness(color: Color, factor: f64, floor: u8) -> Color {
    let scale = |channel: u8| {
        let scaled = (f64::from(channel) * factor).trunc();
        scaled.clamp(f64::from(floor), 255.0) as u8
    };
    Color::new(scale(color.r), scale(color.g), scale(color.b))
}

/// Button color for a swatch: lighter than a dark base, darker than a light one.
pub fn accent_color(color: Color) -> Color {
    let factor = if is_dark(color) {
        LIGHTEN_FACTOR
    } else {
        DARKEN_FACTOR
    };
    adjust_brightness(color, factor, DEFAULT_CHANNEL_FLOOR)
}
