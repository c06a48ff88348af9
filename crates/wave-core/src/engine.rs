//! Per-frame advection of particles under the synthesized wave field.

use crate::constants::{EPS, JITTER_STRENGTH};
use crate::field::ModeTable;
use crate::params::SimParams;
use crate::sampler;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// One build of the particle system: unit-sphere directions, the velocity
/// integrator, the mode table, the RNG stream, and the parameters it was
/// built from. World position of particle `i` is `directions()[i] * radius`.
pub struct Simulation {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    modes: ModeTable,
    rng: StdRng,
    params: SimParams,
}

impl Simulation {
    /// Build from a parameter bundle. A single RNG stream seeded from
    /// `params.seed` is consumed in a fixed order: tangential jitter first,
    /// then mode synthesis, then (only while diffusion is active) the
    /// per-step diffusion draws.
    pub fn build(params: SimParams) -> Self {
        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut positions = sampler::fibonacci_sphere(params.n_points);
        sampler::jitter_tangent(&mut positions, JITTER_STRENGTH, &mut rng);
        let velocities = vec![Vec3::ZERO; positions.len()];
        let modes = ModeTable::build(
            params.num_modes,
            params.freq_base,
            params.field_speed,
            params.axis_bias,
            &mut rng,
        );
        log::info!(
            "built simulation: {} particles, {} modes, seed {}",
            positions.len(),
            modes.len(),
            params.seed
        );
        Self {
            positions,
            velocities,
            modes,
            rng,
            params,
        }
    }

    /// Advance one frame. `dt` is the frame's time delta and `t` the elapsed
    /// simulation time; both come from the host's frame cursor, so the
    /// engine itself is frame-rate-agnostic.
    ///
    /// The per-particle gradient is a proxy: the weighted sum of mode
    /// directions scaled by each mode's cosine response, not the analytic
    /// derivative of the scalar field. Its tangential part pulls particles
    /// toward ridges; the cross product with the radial direction slides
    /// them along contours. Velocity is smoothed exponentially and the
    /// integration step is clamped before positions are renormalized back
    /// onto the unit sphere.
    pub fn step(&mut self, dt: f32, t: f32) {
        let Self {
            positions,
            velocities,
            modes,
            rng,
            params,
        } = self;

        let num_modes = modes.k.len();
        for (pos, vel) in positions.iter_mut().zip(velocities.iter_mut()) {
            let p = *pos;

            let mut grad = Vec3::ZERO;
            for m in 0..num_modes {
                let phase = p.dot(modes.k[m]) + modes.phase[m] + modes.omega[m] * t;
                grad += modes.weight[m] * phase.cos() * modes.k[m];
            }

            // keep motion in the tangent plane
            let g_tan = grad - grad.dot(p) * p;
            let g_norm = g_tan.length();
            let g_hat = g_tan / (g_norm + EPS);

            // direction along contours of constant field value
            let iso = p.cross(g_hat);
            let iso = iso / (iso.length() + EPS);

            // random tangential kick, drawn only when diffusion is active
            let kick = if params.diffusion > 0.0 {
                let r = Vec3::new(
                    rng.sample(StandardNormal),
                    rng.sample(StandardNormal),
                    rng.sample(StandardNormal),
                );
                let r = r - r.dot(p) * p;
                r / (r.length() + EPS)
            } else {
                Vec3::ZERO
            };

            // saturating attraction, damped where the field is flat
            let soft = g_norm / (g_norm + params.softness);

            let target = params.move_speed
                * (params.attract_gain * soft * g_hat + params.along_gain * iso)
                + params.diffusion * kick;
            *vel = params.vel_smooth * *vel + (1.0 - params.vel_smooth) * target;

            // clamp per-frame displacement for stability; the velocity
            // integrator itself keeps the unclamped value
            let mut step = dt * *vel;
            let len = step.length();
            if len > params.step_clamp {
                step *= params.step_clamp / len;
            }

            let moved = p + step;
            *pos = moved / (moved.length() + EPS);
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn modes(&self) -> &ModeTable {
        &self.modes
    }

    /// Unit-sphere directions of all particles.
    pub fn directions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// Overwrite one particle's velocity integrator, e.g. to inject an
    /// impulse from the host.
    pub fn set_velocity(&mut self, index: usize, velocity: Vec3) {
        if let Some(v) = self.velocities.get_mut(index) {
            *v = velocity;
        }
    }

    /// World-space positions, scaled by the domain radius.
    pub fn scaled_positions(&self) -> Vec<Vec3> {
        let radius = self.params.radius;
        self.positions.iter().map(|p| *p * radius).collect()
    }

    /// Flat `[x, y, z, ...]` view of the unit directions, for hosts that
    /// upload vertex buffers directly.
    pub fn positions_f32(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }
}
