//! Linear RGB blending between two endpoint colors.
//!
//! Blending is plain per-channel interpolation in sRGB byte space: no gamma
//! decoding, no perceptual space. Midpoints are rounded half away from zero.

use serde::Serialize;

use crate::color::Color;

/// An ordered run of colors from `start` to `end`, left to right.
///
/// Always holds at least two colors: the first is the start endpoint and the
/// last is the end endpoint. Gradients are never edited in place; each
/// recompute produces a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Gradient {
    colors: Vec<Color>,
}

impl Gradient {
    /// Blends `start` into `end` with `steps` interpolated midpoints.
    ///
    /// The result has `steps + 2` colors. Midpoint `i` (1-based) sits at
    /// ratio `i / (steps + 1)`.
    pub fn blend(start: Color, end: Color, steps: usize) -> Self {
        let denom = (steps + 1) as f64;
        let mut colors = Vec::with_capacity(steps + 2);
        colors.push(start);
        colors.extend((1..=steps).map(|i| lerp(start, end, i as f64 / denom)));
        colors.push(end);
        Self { colors }
    }

    /// Number of swatches, including both endpoints.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: a gradient holds at least its two endpoints.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the swatch at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn start(&self) -> Color {
        self.colors[0]
    }

    pub fn end(&self) -> Color {
        self.colors[self.colors.len() - 1]
    }

    /// Number of interpolated midpoints (`len() - 2`).
    pub fn steps(&self) -> usize {
        self.colors.len() - 2
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }
}

impl<'a> IntoIterator for &'a Gradient {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Interpolates each channel at `ratio` and rounds to the nearest byte.
fn lerp(start: Color, end: Color, ratio: f64) -> Color {
    let [r0, g0, b0] = start.channels();
    let [r1, g1, b1] = end.channels();
    Color::new(
        lerp_channel(r0, r1, ratio),
        lerp_channel(g0, g1, ratio),
        lerp_channel(b0, b1, ratio),
    )
}

fn lerp_channel(from: u8, to: u8, ratio: f64) -> u8 {
    let from = f64::from(from);
    let value = from + ratio * (f64::from(to) - from);
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_to_white_with_one_step_hits_mid_gray() {
        let gradient = Gradient::blend(Color::BLACK, Color::WHITE, 1);
        assert_eq!(
            gradient.colors(),
            &[Color::BLACK, Color::new(128, 128, 128), Color::WHITE]
        );
    }

    #[test]
    fn zero_steps_yields_only_endpoints() {
        let start = Color::new(10, 20, 30);
        let end = Color::new(200, 100, 0);
        let gradient = Gradient::blend(start, end, 0);
        assert_eq!(gradient.colors(), &[start, end]);
        assert_eq!(gradient.steps(), 0);
    }

    #[test]
    fn three_steps_are_evenly_spaced() {
        let gradient = Gradient::blend(Color::new(0, 0, 0), Color::new(200, 100, 40), 3);
        assert_eq!(
            gradient.colors(),
            &[
                Color::new(0, 0, 0),
                Color::new(50, 25, 10),
                Color::new(100, 50, 20),
                Color::new(150, 75, 30),
                Color::new(200, 100, 40),
            ]
        );
    }

    #[test]
    fn descending_channels_round_half_away_from_zero() {
        // 255 -> 0 at ratio 0.5 is 127.5, which rounds up to 128.
        let gradient = Gradient::blend(Color::WHITE, Color::BLACK, 1);
        assert_eq!(gradient.get(1), Some(Color::new(128, 128, 128)));
    }

    #[test]
    fn accessors_report_endpoints_and_length() {
        let start = Color::new(1, 2, 3);
        let end = Color::new(4, 5, 6);
        let gradient = Gradient::blend(start, end, 64);
        assert_eq!(gradient.len(), 66);
        assert!(!gradient.is_empty());
        assert_eq!(gradient.start(), start);
        assert_eq!(gradient.end(), end);
        assert_eq!(gradient.get(66), None);
        assert_eq!(gradient.iter().count(), 66);
    }

    #[test]
    fn gradient_serializes_as_hex_list() {
        let gradient = Gradient::blend(Color::BLACK, Color::WHITE, 1);
        let json = serde_json::to_string(&gradient).unwrap();
        assert_eq!(json, r##"["#000000","#808080","#FFFFFF"]"##);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_color() -> impl Strategy<Value = Color> {
            any::<[u8; 3]>().prop_map(Color::from_channels)
        }

        proptest! {
            #[test]
            fn length_is_steps_plus_two(a in any_color(), b in any_color(), steps in 0usize..=64) {
                prop_assert_eq!(Gradient::blend(a, b, steps).len(), steps + 2);
            }

            #[test]
            fn endpoints_are_preserved(a in any_color(), b in any_color(), steps in 0usize..=64) {
                let gradient = Gradient::blend(a, b, steps);
                prop_assert_eq!(gradient.colors()[0], a);
                prop_assert_eq!(gradient.colors()[steps + 1], b);
            }

            #[test]
            fn identical_endpoints_give_a_flat_gradient(c in any_color(), steps in 0usize..=64) {
                let gradient = Gradient::blend(c, c, steps);
                prop_assert!(gradient.iter().all(|&x| x == c));
            }

            #[test]
            fn channels_move_monotonically(a in any_color(), b in any_color(), steps in 0usize..=64) {
                let gradient = Gradient::blend(a, b, steps);
                for channel in 0..3 {
                    let values: Vec<u8> = gradient.iter().map(|c| c.channels()[channel]).collect();
                    let rising = a.channels()[channel] <= b.channels()[channel];
                    for pair in values.windows(2) {
                        if rising {
                            prop_assert!(pair[0] <= pair[1], "channel {channel} fell: {values:?}");
                        } else {
                            prop_assert!(pair[0] >= pair[1], "channel {channel} rose: {values:?}");
                        }
                    }
                }
            }
        }
    }
}
