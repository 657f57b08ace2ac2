//! The single controller a front end drives.
//!
//! A [`FusionSession`] owns the two color input texts, the step count, the
//! rendering mode, and the last valid gradient. Every setter recomputes, and
//! the front end renders whatever [`FusionSession::view`] holds afterwards:
//! on input change call `recompute`, on recompute call `render`.

use color_fusion_core::color::{FIRST_PLACEHOLDER, SECOND_PLACEHOLDER};
use color_fusion_core::spec::{DEFAULT_STEPS, MAX_STEPS};
use color_fusion_core::{Color, FusionError, GradientSpec, RenderMode, Xorshift64};
use tracing::debug;

use crate::details::SwatchDetails;
use crate::raster::default_export_filename;
use crate::recovery::{GradientView, RecoveryPolicy, RecoveryState};
use crate::strip::{hit_test, render_to_canvas, DrawCommand};

/// What to paint on the canvas for the current view.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// Gradient bands, left to right.
    Strip(Vec<DrawCommand>),
    /// A centered text message shown instead of a gradient.
    Message { text: String, x: f64, y: f64 },
}

/// Interactive gradient state behind one window.
#[derive(Debug, Clone)]
pub struct FusionSession {
    first: String,
    second: String,
    steps: usize,
    mode: RenderMode,
    policy: RecoveryPolicy,
    view: GradientView,
}

impl Default for FusionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FusionSession {
    /// Starts with both inputs showing their placeholders, so the first view
    /// is the black-to-white preview.
    pub fn new() -> Self {
        Self::with_inputs(
            FIRST_PLACEHOLDER,
            SECOND_PLACEHOLDER,
            DEFAULT_STEPS,
            RenderMode::default(),
        )
    }

    /// Starts from the given input texts and settings with a single
    /// recompute. `steps` is clamped like [`set_steps`](Self::set_steps).
    pub fn with_inputs(
        first: impl Into<String>,
        second: impl Into<String>,
        steps: usize,
        mode: RenderMode,
    ) -> Self {
        let mut session = Self {
            first: first.into(),
            second: second.into(),
            steps: steps.min(MAX_STEPS),
            mode,
            policy: RecoveryPolicy::new(),
            view: GradientView::Message(String::new()),
        };
        session.recompute();
        session
    }

    pub fn first_text(&self) -> &str {
        &self.first
    }

    pub fn second_text(&self) -> &str {
        &self.second
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn view(&self) -> &GradientView {
        &self.view
    }

    pub fn state(&self) -> RecoveryState {
        self.policy.state()
    }

    pub fn set_first(&mut self, text: impl Into<String>) -> &GradientView {
        self.first = text.into();
        self.recompute()
    }

    pub fn set_second(&mut self, text: impl Into<String>) -> &GradientView {
        self.second = text.into();
        self.recompute()
    }

    /// Sets the number of intermediate colors, clamped to `0..=MAX_STEPS`.
    pub fn set_steps(&mut self, steps: usize) -> &GradientView {
        self.steps = steps.min(MAX_STEPS);
        self.recompute()
    }

    pub fn set_mode(&mut self, mode: RenderMode) -> &GradientView {
        self.mode = mode;
        self.recompute()
    }

    /// Replaces the first input with a random color.
    pub fn randomize_first(&mut self, rng: &mut Xorshift64) -> &GradientView {
        self.set_first(Color::random(rng).to_hex())
    }

    /// Replaces the second input with a random color.
    pub fn randomize_second(&mut self, rng: &mut Xorshift64) -> &GradientView {
        self.set_second(Color::random(rng).to_hex())
    }

    /// Decodes the inputs into a validated spec.
    ///
    /// Empty inputs count as their placeholder default.
    pub fn spec(&self) -> Result<GradientSpec, FusionError> {
        let start = decode_input(&self.first, FIRST_PLACEHOLDER)?;
        let end = decode_input(&self.second, SECOND_PLACEHOLDER)?;
        Ok(GradientSpec::new(start, end, self.steps)?.with_mode(self.mode))
    }

    /// Rebuilds the gradient from the current inputs.
    ///
    /// Invalid input keeps showing the last valid gradient, or an error
    /// message if there has never been one.
    pub fn recompute(&mut self) -> &GradientView {
        let outcome = self.spec().map(|spec| spec.gradient());
        if let Ok(gradient) = &outcome {
            debug!(
                start = %gradient.start(),
                end = %gradient.end(),
                steps = gradient.steps(),
                mode = self.mode.name(),
                "recomputed gradient"
            );
        }
        self.view = self.policy.resolve(outcome);
        &self.view
    }

    /// Draws the current view onto a `width` × `height` canvas.
    pub fn render(&self, width: f64, height: f64) -> Frame {
        match &self.view {
            GradientView::Gradient(gradient) => {
                Frame::Strip(render_to_canvas(gradient, width, height, self.mode))
            }
            GradientView::Message(text) => Frame::Message {
                text: text.clone(),
                x: width / 2.0,
                y: height / 2.0,
            },
        }
    }

    /// Details of the swatch under a click, or `None` before any valid gradient.
    pub fn click(&self, click_x: f64, canvas_width: f64) -> Option<SwatchDetails> {
        let gradient = self.policy.last_valid()?;
        SwatchDetails::from_gradient(gradient, hit_test(gradient, canvas_width, click_x))
    }

    /// Suggested export file name for the current inputs.
    pub fn default_export_filename(&self) -> Result<String, FusionError> {
        let spec = self.spec()?;
        Ok(default_export_filename(spec.start(), spec.end()))
    }

    /// Writes the current inputs' gradient as a 2160×2160 PNG.
    ///
    /// Unlike the interactive view, invalid inputs are reported, not masked.
    #[cfg(feature = "png")]
    pub fn export(&self, path: &std::path::Path) -> Result<(), FusionError> {
        let spec = self.spec()?;
        crate::export::export_gradient(&spec.gradient(), path)?;
        tracing::info!(
            path = %path.display(),
            start = %spec.start(),
            end = %spec.end(),
            steps = spec.steps(),
            "exported gradient"
        );
        Ok(())
    }
}

/// Decodes one input box; empty text counts as that slot's `placeholder`.
pub fn decode_input(text: &str, placeholder: &str) -> Result<Color, FusionError> {
    if text.is_empty() {
        Color::from_hex(placeholder)
    } else {
        Color::from_hex(text)
    }
}
