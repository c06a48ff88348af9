//! Headless stand-in for the content-creation host.
//!
//! Owns the frame clock and an in-memory geometry sink, builds the
//! simulation from a preset name, drives it frame by frame, then ages it
//! further with the bulk-advance path. Usage:
//!
//! ```text
//! wave-host [PRESET|RANDOM] [SECONDS]
//! ```

use anyhow::{Context, Result};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wave_core::{randomize, FrameClock, GeometrySink, Preset, SimParams, WaveSystem};

const FPS: u32 = 24;
const DRIVER_SECONDS: f32 = 2.0;
const DEMO_POINTS: usize = 5_000;

/// In-memory stand-in for the host's point mesh.
struct PointBuffer {
    positions: Vec<Vec3>,
}

impl GeometrySink for PointBuffer {
    fn point_count(&self) -> usize {
        self.positions.len()
    }

    fn update_positions(&mut self, positions: &[Vec3]) {
        self.positions.copy_from_slice(positions);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let choice = args.next().unwrap_or_else(|| "DEFAULT".to_string());
    let seconds: f32 = match args.next() {
        Some(s) => s.parse().context("SECONDS must be a number")?,
        None => 10.0,
    };

    let mut params = SimParams {
        n_points: DEMO_POINTS,
        ..SimParams::default()
    };
    if choice == "RANDOM" {
        let mut rng = StdRng::from_entropy();
        randomize(&mut params, &mut rng);
        params.reseed(&mut rng);
        log::info!("randomized parameters, seed {}", params.seed);
    } else {
        let preset = Preset::parse(&choice)?;
        preset.apply(&mut params);
        log::info!("applied preset {}", preset.name());
    }
    log::info!(
        "{} points, {} modes, dot radius {}",
        params.n_points,
        params.num_modes,
        params.dot_radius
    );

    let mut system = WaveSystem::new();
    let initial = system.rebuild(params);
    system.attach_sink(Box::new(PointBuffer { positions: initial }));

    // Per-frame driver phase: one step per host frame tick.
    let mut clock = FrameClock::new(FPS);
    for _ in 0..(DRIVER_SECONDS * FPS as f32) as u32 {
        let (dt, t) = clock.tick();
        system.step(dt, t);
    }

    // Age the rest in bulk. The driver loop above has finished, so advance
    // may step directly without double-stepping any frame.
    let remaining = (seconds - DRIVER_SECONDS).max(0.0);
    system.advance(&mut clock, remaining);

    let sim = system
        .simulation()
        .context("simulation disappeared after advancing")?;
    let worst_norm = sim
        .directions()
        .iter()
        .map(|p| (p.length() - 1.0).abs())
        .fold(0.0_f32, f32::max);
    let mean_speed =
        sim.velocities().iter().map(|v| v.length()).sum::<f32>() / sim.len().max(1) as f32;
    log::info!(
        "advanced to frame {} (t = {:.2}s): worst |p|-1 = {:.2e}, mean speed = {:.3e}",
        clock.frame,
        clock.time(),
        worst_norm,
        mean_speed
    );

    system.teardown();
    Ok(())
}
