#![deny(unsafe_code)]
//! Core types for the color-fusion gradient tool.
//!
//! Provides the 8-bit [`Color`] with its hex codec and HSL view, linear
//! [`Gradient`] blending, brightness-based contrast helpers, the validated
//! [`GradientSpec`], the `Xorshift64` PRNG behind random colors, and lenient
//! JSON parameter helpers.

pub mod blend;
pub mod color;
pub mod contrast;
pub mod error;
pub mod params;
pub mod prng;
pub mod spec;

pub use blend::Gradient;
pub use color::{Color, Hsl};
pub use error::FusionError;
pub use prng::Xorshift64;
pub use spec::{GradientSpec, RenderMode};
