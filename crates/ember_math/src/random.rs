//! Deterministic random field
//!
//! Builds on [`mix32`] to produce uniform floats and a continuously
//! interpolated noise field over the real line. Every function here is a
//! pure function of its inputs; identical inputs reproduce identical
//! outputs, which is what lets animation loops replay bit-exactly.

use serde::{Deserialize, Serialize};

use crate::hash::mix32;

/// Uniform float in [0.0, 1.0] derived from `x`.
///
/// Both endpoints are attainable: `mix32` maps 0 to 0, so `uniform01(0)`
/// is exactly 0.0.
#[inline]
pub fn uniform01(x: u32) -> f32 {
    mix32(x) as f32 / 4294967295.0
}

/// Deterministic noise sampled at a real-valued `position`.
///
/// The integer part of `position` selects two adjacent hash samples and the
/// fractional part blends them linearly, so the field is continuous and
/// integer positions reproduce exact [`uniform01`] samples. `position`
/// floors toward negative infinity, keeping the fraction in [0, 1) for
/// negative inputs. Seed arithmetic wraps per u32.
pub fn interpolated01(position: f32, seed: u32) -> f32 {
    let base = position.floor();
    let frac = position - base;
    let i = base as i32;
    let a = uniform01(seed.wrapping_add(i as u32));
    let b = uniform01(seed.wrapping_add(i as u32).wrapping_add(1));
    a * (1.0 - frac) + b * frac
}

/// A seed bound to the random field.
///
/// Cheap to copy. Use one channel per animated property so that properties
/// sharing a timeline never correlate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseChannel {
    seed: u32,
}

impl NoiseChannel {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Uniform sample at integer position `x`.
    #[inline]
    pub fn uniform(&self, x: u32) -> f32 {
        uniform01(self.seed.wrapping_add(x))
    }

    /// Interpolated sample at real `position`.
    #[inline]
    pub fn sample(&self, position: f32) -> f32 {
        interpolated01(position, self.seed)
    }
}

/// Tuning parameters for one noise field, loadable from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldParams {
    pub seed: u32,
    pub frequency: f32,
    pub amplitude: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency: 1.0,
            amplitude: 1.0,
        }
    }
}

impl FieldParams {
    /// Channel carrying this field's seed.
    pub fn channel(&self) -> NoiseChannel {
        NoiseChannel::new(self.seed)
    }

    /// Amplitude-scaled sample at time `t`.
    pub fn sample(&self, t: f32) -> f32 {
        self.amplitude * interpolated01(t * self.frequency, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform01_stays_in_range() {
        for x in [0u32, 1, 2, 42, 1000, 123456789, u32::MAX] {
            let v = uniform01(x);
            assert!((0.0..=1.0).contains(&v), "uniform01({x}) = {v}");
        }
        assert_eq!(uniform01(0), 0.0);
    }

    #[test]
    fn integer_positions_reproduce_uniform_samples() {
        for i in 0u32..8 {
            assert_eq!(interpolated01(i as f32, 5), uniform01(5 + i));
        }
    }

    #[test]
    fn midpoint_is_mean_of_neighbors() {
        let mean = (uniform01(0) + uniform01(1)) / 2.0;
        assert_eq!(interpolated01(0.5, 0), mean);
    }

    #[test]
    fn end_to_end_frame_samples() {
        assert_eq!(interpolated01(0.0, 0), uniform01(0));
        assert_eq!(interpolated01(1.0, 0), uniform01(1));
        assert_eq!(interpolated01(0.5, 0), (uniform01(0) + uniform01(1)) / 2.0);
    }

    #[test]
    fn negative_positions_floor_not_truncate() {
        // -0.25 sits between -1 and 0: base sample is uniform01(seed - 1),
        // blended 75% toward uniform01(seed).
        let a = uniform01(0u32.wrapping_add((-1i32) as u32));
        let b = uniform01(0);
        assert_eq!(interpolated01(-0.25, 0), a * 0.25 + b * 0.75);
    }

    #[test]
    fn field_is_continuous() {
        let eps = 1e-3f32;
        let mut pos = -3.0f32;
        while pos < 3.0 {
            let step = (interpolated01(pos + eps, 9) - interpolated01(pos, 9)).abs();
            assert!(step < 0.01, "jump of {step} at {pos}");
            pos += 0.37;
        }
    }

    #[test]
    fn seed_addition_wraps() {
        // Base index past u32::MAX wraps around; no panic, output in range.
        let v = interpolated01(10.5, u32::MAX - 4);
        assert!((0.0..=1.0).contains(&v));
    }

    #[test]
    fn channel_matches_free_functions() {
        let ch = NoiseChannel::new(77);
        assert_eq!(ch.uniform(3), uniform01(80));
        assert_eq!(ch.sample(2.25), interpolated01(2.25, 77));
    }

    #[test]
    fn params_parse_and_scale() {
        let params: FieldParams =
            serde_json::from_str(r#"{ "seed": 7, "frequency": 2.0, "amplitude": 0.5 }"#).unwrap();
        assert_eq!(params.seed, 7);
        assert_eq!(params.sample(1.5), 0.5 * interpolated01(3.0, 7));
        assert_eq!(params.channel().seed(), 7);
    }
}
