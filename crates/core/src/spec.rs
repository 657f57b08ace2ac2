//! Gradient request: endpoints, step count, and rendering mode.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::blend::Gradient;
use crate::color::Color;
use crate::error::FusionError;
use crate::params::{param_bool, param_string, param_usize};

/// Most intermediate colors a gradient may request.
pub const MAX_STEPS: usize = 64;

/// Step count a fresh session starts with.
pub const DEFAULT_STEPS: usize = 10;

/// How adjacent bands are drawn on an interactive canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Each band is its own rectangle.
    #[default]
    Separated,
    /// Bands overlap by one unit so no seams show between them.
    Seamless,
}

impl RenderMode {
    /// Parses `"separated"` or `"seamless"` (case insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "separated" => Some(RenderMode::Separated),
            "seamless" => Some(RenderMode::Seamless),
            _ => None,
        }
    }

    /// Reads `mode` and `separations` from a JSON object, starting from `current`.
    ///
    /// `separations` wins over `mode` and mirrors the on-screen checkbox:
    /// `false` selects seamless rendering.
    pub fn from_params(params: &Value, current: RenderMode) -> RenderMode {
        let named = RenderMode::from_name(&param_string(params, "mode", current.name()))
            .unwrap_or(current);
        if param_bool(params, "separations", named == RenderMode::Separated) {
            RenderMode::Separated
        } else {
            RenderMode::Seamless
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RenderMode::Separated => "separated",
            RenderMode::Seamless => "seamless",
        }
    }
}

/// A validated request for one gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGradientSpec")]
pub struct GradientSpec {
    start: Color,
    end: Color,
    steps: usize,
    mode: RenderMode,
}

/// Unvalidated wire form of [`GradientSpec`].
#[derive(Deserialize)]
struct RawGradientSpec {
    start: Color,
    end: Color,
    steps: usize,
    #[serde(default)]
    mode: RenderMode,
}

impl TryFrom<RawGradientSpec> for GradientSpec {
    type Error = FusionError;

    fn try_from(raw: RawGradientSpec) -> Result<Self, Self::Error> {
        Ok(GradientSpec::new(raw.start, raw.end, raw.steps)?.with_mode(raw.mode))
    }
}

impl GradientSpec {
    /// Returns `FusionError::StepsOutOfRange` if `steps` exceeds [`MAX_STEPS`].
    pub fn new(start: Color, end: Color, steps: usize) -> Result<Self, FusionError> {
        if steps > MAX_STEPS {
            return Err(FusionError::StepsOutOfRange(steps));
        }
        Ok(Self {
            start,
            end,
            steps,
            mode: RenderMode::default(),
        })
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Applies `steps`, `mode`, and `separations` overrides from a JSON object.
    ///
    /// Unknown keys and wrongly typed values are ignored; an out-of-range
    /// step count is still an error.
    pub fn with_overrides(self, params: &Value) -> Result<Self, FusionError> {
        let steps = param_usize(params, "steps", self.steps);
        let mode = RenderMode::from_params(params, self.mode);
        Ok(Self::new(self.start, self.end, steps)?.with_mode(mode))
    }

    pub fn start(&self) -> Color {
        self.start
    }

    pub fn end(&self) -> Color {
        self.end
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Blends the endpoints into a fresh gradient.
    pub fn gradient(&self) -> Gradient {
        Gradient::blend(self.start, self.end, self.steps)
    }
}
