//! Interactive gradient strip: rectangle draw commands and click hit testing.
//!
//! The canvas width is split into `gradient.len()` equal bands (fractional
//! widths are kept; the toolkit decides how to snap them to pixels).

use color_fusion_core::{Color, Gradient, RenderMode};
use serde::Serialize;

/// How far a seamless band reaches past its right edge to cover the seam.
pub const SEAM_OVERLAP: f64 = 1.0;

/// One filled rectangle for the toolkit canvas, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawCommand {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub fill: Color,
    pub outline: Color,
}

/// Width of one band when `gradient` spans `canvas_width`.
pub fn band_width(gradient: &Gradient, canvas_width: f64) -> f64 {
    canvas_width / gradient.len() as f64
}

/// Lays the gradient out left to right across the canvas.
///
/// Every band is outlined in its own fill color. In
/// [`RenderMode::Seamless`] each band's right edge also extends by
/// [`SEAM_OVERLAP`] so neighbours overlap.
pub fn render_to_canvas(
    gradient: &Gradient,
    canvas_width: f64,
    canvas_height: f64,
    mode: RenderMode,
) -> Vec<DrawCommand> {
    let band = band_width(gradient, canvas_width);
    let overlap = match mode {
        RenderMode::Separated => 0.0,
        RenderMode::Seamless => SEAM_OVERLAP,
    };
    gradient
        .iter()
        .enumerate()
        .map(|(i, &color)| DrawCommand {
            x0: i as f64 * band,
            y0: 0.0,
            x1: (i + 1) as f64 * band + overlap,
            y1: canvas_height,
            fill: color,
            outline: color,
        })
        .collect()
}

/// Index of the band under `click_x`, clamped to the gradient.
///
/// Clicks left of the canvas, NaN clicks, and degenerate canvas widths all
/// resolve to the first band.
pub fn hit_test(gradient: &Gradient, canvas_width: f64, click_x: f64) -> usize {
    let last = gradient.len() - 1;
    if !(canvas_width > 0.0 && click_x > 0.0) {
        return 0;
    }
    let index = (click_x / band_width(gradient, canvas_width)).floor();
    // Float-to-int casts saturate, so huge clicks land on the last band.
    (index as usize).min(last)
}
