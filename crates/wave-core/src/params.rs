//! Parameter bundles, named presets, and the bounded randomizer.

use crate::constants::SEED_MAX;
use glam::Vec3;
use rand::Rng;
use thiserror::Error;

/// Everything one build of the simulation needs, fixed for the build's
/// lifetime. Produced by a UI, a preset, or [`randomize`]; the engine does
/// not re-validate ranges, so providers should stay within the documented
/// bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct SimParams {
    /// Particle count, `[100, 100_000]`. Fixed per build.
    pub n_points: usize,
    /// Radius of the spherical domain, `(0, 5]`.
    pub radius: f32,
    /// Radius of each instanced dot, `(0, 0.05]`. Consumed by hosts only.
    pub dot_radius: f32,
    /// RNG seed, `[0, 999_999]`.
    pub seed: u64,
    /// Number of wave modes, `[1, 32]`.
    pub num_modes: usize,
    /// Base spatial frequency for mode directions, `[0.1, 10]`.
    pub freq_base: f32,
    /// Speed of the field's phase evolution, `(0, 2]`.
    pub field_speed: f32,
    /// Overall drift speed, `[0.001, 0.5]`.
    pub move_speed: f32,
    /// Attraction toward ridges, `[0, 2]`.
    pub attract_gain: f32,
    /// Sliding along iso-lines, `[0, 2]`.
    pub along_gain: f32,
    /// Tangential random-walk amount, `[0, 0.02]`. Zero disables the
    /// per-step RNG draws entirely.
    pub diffusion: f32,
    /// Preferred axis for banding, components in `[-1, 1]`. Zero disables.
    pub axis_bias: Vec3,
    /// Exponential velocity smoothing factor, `(0, 1)`; closer to 1 is
    /// slower to respond.
    pub vel_smooth: f32,
    /// Maximum travel per frame, `> 0`.
    pub step_clamp: f32,
    /// Saturation constant damping attraction in flat regions, `> 0`.
    pub softness: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            n_points: 50_000,
            radius: 1.0,
            dot_radius: 0.0025,
            seed: 0,
            num_modes: 4,
            freq_base: 1.2,
            field_speed: 0.01,
            move_speed: 0.05,
            attract_gain: 0.7,
            along_gain: 0.7,
            diffusion: 0.002,
            axis_bias: Vec3::ZERO,
            vel_smooth: 0.97,
            step_clamp: 0.002,
            softness: 0.6,
        }
    }
}

impl SimParams {
    /// Assign a fresh random seed so the next rebuild gives a new variation
    /// with the same tuning.
    pub fn reseed(&mut self, rng: &mut impl Rng) {
        self.seed = rng.gen_range(0..=SEED_MAX);
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresetError {
    #[error("unknown preset: {0}")]
    Unknown(String),
}

/// Named parameter bundles. Applying a preset overrides the field-shape and
/// dynamics fields; particle count, radii, and seed are left alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Default,
    Ripples,
    Chaos,
    Bands,
    Soft,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Default,
        Preset::Ripples,
        Preset::Chaos,
        Preset::Bands,
        Preset::Soft,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Default => "DEFAULT",
            Preset::Ripples => "RIPPLES",
            Preset::Chaos => "CHAOS",
            Preset::Bands => "BANDS",
            Preset::Soft => "SOFT",
        }
    }

    /// Look up a preset by its name. Unknown names are rejected without
    /// touching anything.
    pub fn parse(name: &str) -> Result<Self, PresetError> {
        match name {
            "DEFAULT" => Ok(Preset::Default),
            "RIPPLES" => Ok(Preset::Ripples),
            "CHAOS" => Ok(Preset::Chaos),
            "BANDS" => Ok(Preset::Bands),
            "SOFT" => Ok(Preset::Soft),
            other => Err(PresetError::Unknown(other.to_string())),
        }
    }

    pub fn apply(self, p: &mut SimParams) {
        match self {
            Preset::Default => {
                p.num_modes = 5;
                p.freq_base = 1.4;
                p.move_speed = 0.07;
                p.attract_gain = 0.70;
                p.along_gain = 0.70;
                p.diffusion = 0.0010;
                p.vel_smooth = 0.97;
                p.step_clamp = 0.0012;
                p.softness = 0.6;
                p.axis_bias = Vec3::ZERO;
            }
            Preset::Ripples => {
                p.num_modes = 7;
                p.freq_base = 2.0;
                p.move_speed = 0.03;
                p.attract_gain = 0.85;
                p.along_gain = 0.30;
                p.diffusion = 0.0002;
                p.vel_smooth = 0.99;
                p.step_clamp = 0.0008;
                p.softness = 0.3;
                p.axis_bias = Vec3::ZERO;
            }
            Preset::Chaos => {
                p.num_modes = 10;
                p.freq_base = 1.6;
                p.move_speed = 0.14;
                p.attract_gain = 0.40;
                p.along_gain = 1.10;
                p.diffusion = 0.0040;
                p.vel_smooth = 0.94;
                p.step_clamp = 0.0020;
                p.softness = 0.9;
                p.axis_bias = Vec3::ZERO;
            }
            Preset::Bands => {
                p.num_modes = 3;
                p.freq_base = 0.9;
                p.move_speed = 0.05;
                p.attract_gain = 0.85;
                p.along_gain = 0.35;
                p.diffusion = 0.0003;
                p.vel_smooth = 0.99;
                p.step_clamp = 0.0010;
                p.softness = 0.2;
                // subtle polar banding
                p.axis_bias = Vec3::new(0.0, 0.0, 0.35);
            }
            Preset::Soft => {
                p.num_modes = 5;
                p.freq_base = 1.1;
                p.move_speed = 0.04;
                p.attract_gain = 0.65;
                p.along_gain = 0.60;
                p.diffusion = 0.0007;
                p.vel_smooth = 0.99;
                p.step_clamp = 0.0010;
                p.softness = 1.2;
                p.axis_bias = Vec3::ZERO;
            }
        }
    }
}

/// Overwrite the field-shape and dynamics parameters with uniform draws from
/// curated ranges. Combinations are not checked for synergy; the caller
/// accepts whatever falls out.
pub fn randomize(p: &mut SimParams, rng: &mut impl Rng) {
    p.num_modes = rng.gen_range(2..=10);
    p.freq_base = rng.gen_range(0.8..2.2);
    p.move_speed = rng.gen_range(0.02..0.15);
    p.attract_gain = rng.gen_range(0.3..1.2);
    p.along_gain = rng.gen_range(0.3..1.2);
    p.diffusion = rng.gen_range(0.0..0.003);
    p.vel_smooth = rng.gen_range(0.93..0.99);
    p.step_clamp = rng.gen_range(0.0006..0.002);
    p.softness = rng.gen_range(0.3..1.2);
}
