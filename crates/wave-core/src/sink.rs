//! Interfaces to the host: geometry output and frame timing.
//!
//! These types intentionally avoid referencing any host API. The host owns
//! the scene graph and the per-frame callback; the core only needs a place
//! to hand position arrays and a cursor that maps frames to seconds.

use glam::Vec3;

/// Receives the world-space particle positions once per step. Implemented
/// by the host's geometry layer (mesh vertices, instance buffer, ...).
pub trait GeometrySink {
    /// Number of points the sink currently holds. The store skips the
    /// visual update when this disagrees with the simulation's count.
    fn point_count(&self) -> usize;

    /// Accept a full position array, already scaled to the domain radius.
    fn update_positions(&mut self, positions: &[Vec3]);
}

/// Frame cursor mapping host frames to simulation time: `t = frame / fps`.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    pub fps: u32,
    pub frame: u64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            fps: fps.max(1),
            frame: 0,
        }
    }

    /// Time delta of one frame.
    pub fn dt(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Elapsed simulation time at the current frame.
    pub fn time(&self) -> f32 {
        self.frame as f32 / self.fps as f32
    }

    /// Advance one frame and return `(dt, t)` for the step call.
    pub fn tick(&mut self) -> (f32, f32) {
        self.frame += 1;
        (self.dt(), self.time())
    }
}
