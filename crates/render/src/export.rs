//! PNG encoding of an exported gradient.
//!
//! Feature-gated behind `png` (default on) so embedders that only need draw
//! commands do not pull in the `image` crate. The pixels themselves come from
//! [`crate::raster`], which is always available.

use std::path::Path;

use color_fusion_core::{FusionError, Gradient};
use image::{ImageFormat, RgbImage};

use crate::raster::{render_to_image, RasterImage, EXPORT_SIZE};

/// Writes an RGB raster to `path` as PNG, whatever the file extension.
///
/// Returns `FusionError::ExportIo` carrying the underlying reason if encoding
/// or writing fails.
pub fn write_png(image: RasterImage, path: &Path) -> Result<(), FusionError> {
    let (width, height) = (image.width(), image.height());
    let buffer = RgbImage::from_raw(width, height, image.into_raw())
        .ok_or_else(|| FusionError::ExportIo("RGB buffer size mismatch".into()))?;
    buffer
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| FusionError::ExportIo(e.to_string()))
}

/// Rasterizes `gradient` at the fixed export resolution and writes it as PNG.
pub fn export_gradient(gradient: &Gradient, path: &Path) -> Result<(), FusionError> {
    let image = render_to_image(gradient, EXPORT_SIZE, EXPORT_SIZE)?;
    write_png(image, path)
}
