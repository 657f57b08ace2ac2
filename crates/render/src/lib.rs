#![deny(unsafe_code)]
//! Gradient rendering and the interactive session for color-fusion.
//!
//! This crate sits between `color-fusion-core` (colors and blending) and the
//! front ends. It turns a [`Gradient`](color_fusion_core::Gradient) into
//! canvas draw commands or an export raster, resolves clicks to swatches,
//! and owns the recovery policy inside [`FusionSession`].

pub mod details;
pub mod raster;
pub mod recovery;
pub mod session;
pub mod strip;

#[cfg(feature = "png")]
pub mod export;

pub use details::SwatchDetails;
pub use raster::{render_to_image, RasterImage, EXPORT_SIZE};
pub use recovery::{GradientView, RecoveryPolicy, RecoveryState};
pub use session::{FusionSession, Frame};
pub use strip::{hit_test, render_to_canvas, DrawCommand};
