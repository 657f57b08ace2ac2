//! The swatch details view shown when a band is clicked.

use color_fusion_core::contrast::{accent_color, legible_text_color};
use color_fusion_core::{Color, Gradient, Hsl};
use serde::Serialize;

/// Everything the details popup displays for one swatch.
///
/// `text_color` is legible on `color`; `button_color` is the accent used for
/// the copy button. Copying puts [`SwatchDetails::clipboard_text`] on the
/// clipboard, which the toolkit owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwatchDetails {
    pub index: usize,
    pub color: Color,
    pub rgb: [u8; 3],
    pub hsl: Hsl,
    pub text_color: Color,
    pub button_color: Color,
}

impl SwatchDetails {
    pub fn new(index: usize, color: Color) -> Self {
        Self {
            index,
            color,
            rgb: color.channels(),
            hsl: color.to_hsl(),
            text_color: legible_text_color(color),
            button_color: accent_color(color),
        }
    }

    /// Details for swatch `index`, or `None` past the end of the gradient.
    pub fn from_gradient(gradient: &Gradient, index: usize) -> Option<Self> {
        gradient.get(index).map(|color| Self::new(index, color))
    }

    pub fn hex(&self) -> String {
        self.color.to_hex()
    }

    pub fn clipboard_text(&self) -> String {
        self.hex()
    }

    /// The three popup labels: hex, RGB, and HSL.
    pub fn labels(&self) -> [String; 3] {
        let [r, g, b] = self.rgb;
        [
            format!("Hex: {}", self.hex()),
            format!("RGB: ({r}, {g}, {b})"),
            format!("HSL: {}", self.hsl),
        ]
    }
}
