// Shared tuning constants for the wave-field simulation.

/// Guard added to divisors when normalizing near-degenerate vectors.
pub const EPS: f32 = 1e-9;

// Initial placement
pub const JITTER_STRENGTH: f32 = 0.85; // tangential jitter as a fraction of mean point spacing

// Mode synthesis jitter, applied per mode on top of the base parameters
pub const FREQ_JITTER_MIN: f32 = 0.7;
pub const FREQ_JITTER_MAX: f32 = 1.3;
pub const WEIGHT_MIN: f32 = 0.6;
pub const WEIGHT_MAX: f32 = 1.0;
pub const OMEGA_JITTER_MIN: f32 = 0.6;
pub const OMEGA_JITTER_MAX: f32 = 1.4;

// Axis-bias blend: how much of the drawn direction survives vs. the bias pull
pub const BIAS_KEEP: f32 = 0.85;
pub const BIAS_PULL: f32 = 0.15;

/// Tolerance used when checking the unit-norm invariant on particle directions.
pub const UNIT_NORM_TOL: f32 = 1e-5;

/// Upper bound (inclusive) for randomly assigned seeds.
pub const SEED_MAX: u64 = 999_999;
