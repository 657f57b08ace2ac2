//! CPU rasterization of a gradient into an RGB8 pixel buffer for export.
//!
//! Always available (no feature gate); only the PNG encoding in
//! [`crate::export`] needs the `image` crate.

use color_fusion_core::{Color, FusionError, Gradient};

/// Side length of exported images, in pixels.
pub const EXPORT_SIZE: u32 = 2160;

/// A row-major RGB8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Creates an image of the given size filled with `background`.
    ///
    /// Returns `FusionError::InvalidDimensions` if either side is zero or the
    /// buffer size would overflow `usize`.
    pub fn filled(width: u32, height: u32, background: Color) -> Result<Self, FusionError> {
        if width == 0 || height == 0 {
            return Err(FusionError::InvalidDimensions);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or(FusionError::InvalidDimensions)?;
        let pixels = background
            .channels()
            .iter()
            .copied()
            .cycle()
            .take(len)
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes, three per pixel, row by row.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes the image, returning its RGB bytes without copying.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some(Color::new(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
        ))
    }

    /// Fills columns `[x0, x1)` over the full height. Out-of-range columns
    /// are clipped.
    pub fn fill_columns(&mut self, x0: u32, x1: u32, color: Color) {
        let x1 = x1.min(self.width);
        if x0 >= x1 {
            return;
        }
        let rgb = color.channels();
        let stride = self.width as usize * 3;
        for row in self.pixels.chunks_exact_mut(stride) {
            let span = &mut row[x0 as usize * 3..x1 as usize * 3];
            for px in span.chunks_exact_mut(3) {
                px.copy_from_slice(&rgb);
            }
        }
    }
}

/// Pixel column where band `index` of `count` begins on a `width`-wide image.
fn band_edge(index: usize, count: usize, width: u32) -> u32 {
    let edge = (index as f64 * f64::from(width) / count as f64).round();
    (edge as u32).min(width)
}

/// Draws the gradient as full-height vertical bands on a white background.
///
/// Band `i` covers columns `[round(i * w / n), round((i + 1) * w / n))`, so
/// bands tile the image with no gaps and differ in width by at most a pixel.
pub fn render_to_image(
    gradient: &Gradient,
    width: u32,
    height: u32,
) -> Result<RasterImage, FusionError> {
    let mut image = RasterImage::filled(width, height, Color::WHITE)?;
    let count = gradient.len();
    for (i, &color) in gradient.iter().enumerate() {
        image.fill_columns(
            band_edge(i, count, width),
            band_edge(i + 1, count, width),
            color,
        );
    }
    Ok(image)
}

/// Suggested file name for an exported gradient, e.g.
/// `"000000_fused_with_FFFFFF.png"`.
pub fn default_export_filename(first: Color, second: Color) -> String {
    let first = first.to_hex();
    let second = second.to_hex();
    format!(
        "{}_fused_with_{}.png",
        first.trim_start_matches('#'),
        second.trim_start_matches('#')
    )
}
