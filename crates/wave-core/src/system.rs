//! Owns the one live simulation and mediates rebuild, step, and teardown.

use crate::engine::Simulation;
use crate::params::SimParams;
use crate::sink::{FrameClock, GeometrySink};
use glam::Vec3;

/// Two-state store around [`Simulation`]: either nothing is built and every
/// step is a silent no-op, or exactly one build is live together with an
/// optional cached geometry sink. Rebuilding replaces the build wholesale;
/// there is never a half-constructed state observable from outside.
#[derive(Default)]
pub struct WaveSystem {
    sim: Option<Simulation>,
    sink: Option<Box<dyn GeometrySink>>,
}

impl WaveSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any prior build and return the initial world-space positions
    /// so the host can construct its geometry. Any previously attached sink
    /// belonged to the old build and is dropped.
    pub fn rebuild(&mut self, params: SimParams) -> Vec<Vec3> {
        self.sink = None;
        let sim = Simulation::build(params);
        let initial = sim.scaled_positions();
        self.sim = Some(sim);
        initial
    }

    /// Attach the geometry sink for the current build.
    pub fn attach_sink(&mut self, sink: Box<dyn GeometrySink>) {
        self.sink = Some(sink);
    }

    pub fn is_built(&self) -> bool {
        self.sim.is_some()
    }

    pub fn simulation(&self) -> Option<&Simulation> {
        self.sim.as_ref()
    }

    pub fn simulation_mut(&mut self) -> Option<&mut Simulation> {
        self.sim.as_mut()
    }

    /// Drop the build and the sink handle. Subsequent steps are no-ops
    /// until the next rebuild.
    pub fn teardown(&mut self) {
        if self.sim.take().is_some() {
            log::info!("simulation torn down");
        }
        self.sink = None;
    }

    /// Advance one frame. Calling before any build is a silent no-op, since
    /// the host's per-frame callback may fire before the first rebuild. A
    /// missing or mismatched sink skips the visual update only; internal
    /// state still advances so a later valid sink sees a consistent,
    /// non-stale simulation.
    pub fn step(&mut self, dt: f32, t: f32) {
        let Some(sim) = self.sim.as_mut() else {
            log::debug!("step before build, ignoring");
            return;
        };
        sim.step(dt, t);
        if let Some(sink) = self.sink.as_mut() {
            if sink.point_count() == sim.len() {
                sink.update_positions(&sim.scaled_positions());
            } else {
                log::debug!(
                    "sink holds {} points but simulation has {}, skipping visual update",
                    sink.point_count(),
                    sim.len()
                );
            }
        }
    }

    /// Advance by `seconds` of simulation time, one discrete frame at a
    /// time. Equivalent to `seconds * fps` sequential [`step`]s; phase
    /// evaluation and any diffusion draws happen per intermediate frame,
    /// never batched. Callers whose per-frame driver is already stepping
    /// must not also call this for the same frames.
    ///
    /// [`step`]: WaveSystem::step
    pub fn advance(&mut self, clock: &mut FrameClock, seconds: f32) {
        let frames = (seconds * clock.fps as f32).round() as u64;
        for _ in 0..frames {
            let (dt, t) = clock.tick();
            self.step(dt, t);
        }
    }
}
