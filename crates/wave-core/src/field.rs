//! Multi-mode wave field synthesis.

use crate::constants::{
    BIAS_KEEP, BIAS_PULL, EPS, FREQ_JITTER_MAX, FREQ_JITTER_MIN, OMEGA_JITTER_MAX,
    OMEGA_JITTER_MIN, WEIGHT_MAX, WEIGHT_MIN,
};
use glam::Vec3;
use rand::Rng;
use rand_distr::StandardNormal;
use std::f32::consts::TAU;

/// One build's table of wave modes. Each mode is a direction-frequency
/// vector (magnitude = spatial frequency), a weight, a static phase, and an
/// angular speed. Immutable until the next rebuild.
#[derive(Clone, Debug)]
pub struct ModeTable {
    pub k: Vec<Vec3>,
    pub weight: Vec<f32>,
    pub phase: Vec<f32>,
    pub omega: Vec<f32>,
}

impl ModeTable {
    /// Synthesize `num_modes` random modes. Directions come from normalized
    /// standard-normal draws, scaled by `freq_base` with per-mode jitter;
    /// angular speeds scale `field_speed` to radians per unit time.
    ///
    /// Draw order is fixed: all direction components, then per-mode
    /// frequency jitter, weights, phases, and angular speeds.
    ///
    /// When `axis_bias` is non-zero each row is blended toward the bias and
    /// renormalized to unit length, which absorbs the frequency scaling of
    /// the biased modes. This trade of frequency for alignment is deliberate
    /// and the banded presets depend on the look it produces.
    pub fn build(
        num_modes: usize,
        freq_base: f32,
        field_speed: f32,
        axis_bias: Vec3,
        rng: &mut impl Rng,
    ) -> Self {
        let mut k: Vec<Vec3> = (0..num_modes)
            .map(|_| {
                let v = Vec3::new(
                    rng.sample(StandardNormal),
                    rng.sample(StandardNormal),
                    rng.sample(StandardNormal),
                );
                v / (v.length() + EPS)
            })
            .collect();
        for dir in k.iter_mut() {
            *dir *= freq_base * rng.gen_range(FREQ_JITTER_MIN..FREQ_JITTER_MAX);
        }
        let weight = (0..num_modes)
            .map(|_| rng.gen_range(WEIGHT_MIN..WEIGHT_MAX))
            .collect();
        let phase = (0..num_modes).map(|_| rng.gen_range(0.0..TAU)).collect();
        let omega = (0..num_modes)
            .map(|_| rng.gen_range(OMEGA_JITTER_MIN..OMEGA_JITTER_MAX) * field_speed * TAU)
            .collect();

        if axis_bias.length() > 0.0 {
            let bias = axis_bias / axis_bias.length();
            for dir in k.iter_mut() {
                let blended = BIAS_KEEP * *dir + BIAS_PULL * bias;
                *dir = blended / (blended.length() + EPS);
            }
        }

        Self {
            k,
            weight,
            phase,
            omega,
        }
    }

    pub fn len(&self) -> usize {
        self.k.len()
    }

    pub fn is_empty(&self) -> bool {
        self.k.is_empty()
    }
}
