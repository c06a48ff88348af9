//! Even point placement on the unit sphere.
//!
//! A golden-angle spiral gives deterministic, near-uniform coverage; a small
//! jitter in each point's tangent plane breaks up the residual lattice
//! pattern the spiral leaves behind.

use crate::constants::EPS;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Golden-angle (Fibonacci) spiral: `n` unit directions, evenly spread.
/// Deterministic given `n`; consumes no randomness.
pub fn fibonacci_sphere(n: usize) -> Vec<Vec3> {
    let ga = PI * (3.0 - 5.0_f32.sqrt());
    (0..n)
        .map(|i| {
            let fi = i as f32;
            let z = 1.0 - (2.0 * fi + 1.0) / n as f32;
            let r = (1.0 - z * z).max(0.0).sqrt();
            let theta = ga * fi;
            Vec3::new(theta.cos() * r, theta.sin() * r, z).normalize()
        })
        .collect()
}

/// Displace each direction within its tangent plane by up to
/// `strength * mean_spacing` (mean spacing on the unit sphere is `2/sqrt(n)`),
/// then renormalize back onto the sphere.
///
/// Draw order is fixed: one polar angle per point for the whole array, then
/// one radius per point for the whole array. Rebuilds with the same seed
/// reproduce the same placement.
pub fn jitter_tangent(dirs: &mut [Vec3], strength: f32, rng: &mut impl Rng) {
    let n = dirs.len();
    if n == 0 {
        return;
    }
    let spacing = 2.0 / (n as f32).sqrt();
    let angles: Vec<f32> = (0..n).map(|_| rng.gen_range(0.0..TAU)).collect();
    let radii: Vec<f32> = (0..n)
        .map(|_| spacing * strength * rng.gen::<f32>().sqrt())
        .collect();
    for (i, dir) in dirs.iter_mut().enumerate() {
        let (t, b) = tangent_basis(*dir);
        let offset = t * angles[i].cos() + b * angles[i].sin();
        let displaced = *dir + offset * radii[i];
        *dir = displaced / (displaced.length() + EPS);
    }
}

/// Orthonormal basis of the tangent plane at `dir`. The helper axis avoids
/// degeneracy near the poles.
pub fn tangent_basis(dir: Vec3) -> (Vec3, Vec3) {
    let helper = if dir.z.abs() > 0.9 { Vec3::X } else { Vec3::Z };
    let t = dir.cross(helper);
    let t = t / (t.length() + EPS);
    let b = dir.cross(t);
    (t, b)
}
