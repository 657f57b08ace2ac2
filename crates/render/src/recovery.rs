//! Fallback behaviour when the current inputs do not produce a gradient.
//!
//! While a previous gradient exists, failures are masked by showing it again
//! (typing `#12` on the way to `#123456` should not flicker). Before the first
//! success there is nothing to fall back to, so an error message is shown.

use color_fusion_core::{FusionError, Gradient};

/// Whether a last valid gradient is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryState {
    Empty,
    Valid,
}

/// What the gradient area should display after a recompute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradientView {
    Gradient(Gradient),
    Message(String),
}

impl GradientView {
    pub fn gradient(&self) -> Option<&Gradient> {
        match self {
            GradientView::Gradient(g) => Some(g),
            GradientView::Message(_) => None,
        }
    }
}

/// Owns the last valid gradient and decides what a recompute shows.
#[derive(Debug, Clone, Default)]
pub struct RecoveryPolicy {
    last_valid: Option<Gradient>,
}

impl RecoveryPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RecoveryState {
        match self.last_valid {
            Some(_) => RecoveryState::Valid,
            None => RecoveryState::Empty,
        }
    }

    pub fn last_valid(&self) -> Option<&Gradient> {
        self.last_valid.as_ref()
    }

    /// Caches `gradient` as the last valid one and shows it.
    pub fn on_success(&mut self, gradient: Gradient) -> GradientView {
        self.last_valid = Some(gradient.clone());
        GradientView::Gradient(gradient)
    }

    /// Re-shows the last valid gradient, or an error message if there is none.
    ///
    /// The cause of the failure does not change the outcome.
    pub fn on_failure(&self, error: &FusionError) -> GradientView {
        match &self.last_valid {
            Some(gradient) => GradientView::Gradient(gradient.clone()),
            None => GradientView::Message(format!("Error: {error}")),
        }
    }

    pub fn resolve(&mut self, outcome: Result<Gradient, FusionError>) -> GradientView {
        match outcome {
            Ok(gradient) => self.on_success(gradient),
            Err(e) => self.on_failure(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_fusion_core::Color;

    fn gradient(steps: usize) -> Gradient {
        Gradient::blend(Color::BLACK, Color::WHITE, steps)
    }

    #[test]
    fn starts_empty() {
        let policy = RecoveryPolicy::new();
        assert_eq!(policy.state(), RecoveryState::Empty);
        assert!(policy.last_valid().is_none());
    }

    #[test]
    fn failure_while_empty_shows_error_message() {
        let mut policy = RecoveryPolicy::new();
        let view = policy.resolve(Err(FusionError::InvalidHexLength { len: 2 }));
        match view {
            GradientView::Message(msg) => {
                assert!(msg.starts_with("Error: "), "got {msg}");
                assert!(msg.contains("6 characters"), "got {msg}");
            }
            other => panic!("expected message, got {other:?}"),
        }
        assert_eq!(policy.state(), RecoveryState::Empty);
    }

    #[test]
    fn success_caches_and_shows_gradient() {
        let mut policy = RecoveryPolicy::new();
        let view = policy.resolve(Ok(gradient(3)));
        assert_eq!(view, GradientView::Gradient(gradient(3)));
        assert_eq!(policy.state(), RecoveryState::Valid);
        assert_eq!(policy.last_valid(), Some(&gradient(3)));
    }

    #[test]
    fn failure_while_valid_reshows_previous_gradient() {
        let mut policy = RecoveryPolicy::new();
        policy.resolve(Ok(gradient(3)));
        for err in [
            FusionError::InvalidHexLength { len: 4 },
            FusionError::InvalidHexDigits("GG".into()),
        ] {
            let view = policy.resolve(Err(err));
            assert_eq!(view, GradientView::Gradient(gradient(3)));
        }
        assert_eq!(policy.state(), RecoveryState::Valid);
    }

    #[test]
    fn each_success_overwrites_the_cache() {
        let mut policy = RecoveryPolicy::new();
        policy.resolve(Ok(gradient(3)));
        policy.resolve(Ok(gradient(7)));
        let view = policy.resolve(Err(FusionError::InvalidHexDigits("zz".into())));
        assert_eq!(view.gradient(), Some(&gradient(7)));
    }
}
