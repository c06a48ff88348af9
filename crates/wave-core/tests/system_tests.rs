// State-store lifecycle: no-op before build, sink mismatch guard, teardown,
// and batch-vs-manual equivalence of the bulk advance.

use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wave_core::{FrameClock, GeometrySink, SimParams, WaveSystem};

#[derive(Default)]
struct RecordingSink {
    positions: Vec<Vec3>,
    updates: usize,
}

/// Shared handle so tests can inspect the sink after handing it to the store.
#[derive(Clone)]
struct SharedSink(Rc<RefCell<RecordingSink>>);

impl SharedSink {
    fn with_capacity(n: usize) -> Self {
        Self(Rc::new(RefCell::new(RecordingSink {
            positions: vec![Vec3::ZERO; n],
            updates: 0,
        })))
    }
}

impl GeometrySink for SharedSink {
    fn point_count(&self) -> usize {
        self.0.borrow().positions.len()
    }

    fn update_positions(&mut self, positions: &[Vec3]) {
        let mut inner = self.0.borrow_mut();
        inner.positions = positions.to_vec();
        inner.updates += 1;
    }
}

fn small_params(n_points: usize, seed: u64) -> SimParams {
    SimParams {
        n_points,
        seed,
        ..SimParams::default()
    }
}

#[test]
fn step_before_build_is_a_silent_noop() {
    let mut system = WaveSystem::new();
    assert!(!system.is_built());
    system.step(1.0 / 24.0, 0.0);
    system.step(1.0 / 24.0, 1.0);
    assert!(!system.is_built());
    assert!(system.simulation().is_none());
}

#[test]
fn rebuild_returns_initial_positions_scaled_to_radius() {
    let params = SimParams {
        radius: 0.5,
        ..small_params(200, 1)
    };
    let mut system = WaveSystem::new();
    let initial = system.rebuild(params);
    assert_eq!(initial.len(), 200);
    for p in &initial {
        assert!((p.length() - 0.5).abs() < 1e-4);
    }
    assert!(system.is_built());
}

#[test]
fn matching_sink_receives_scaled_updates() {
    let mut system = WaveSystem::new();
    let initial = system.rebuild(small_params(150, 2));
    let sink = SharedSink::with_capacity(initial.len());
    system.attach_sink(Box::new(sink.clone()));

    system.step(1.0 / 24.0, 0.0);
    system.step(1.0 / 24.0, 1.0 / 24.0);

    let inner = sink.0.borrow();
    assert_eq!(inner.updates, 2);
    assert_eq!(inner.positions.len(), 150);
    for p in &inner.positions {
        assert!((p.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn mismatched_sink_skips_visual_update_but_state_advances() {
    let mut system = WaveSystem::new();
    system.rebuild(small_params(150, 2));
    let sink = SharedSink::with_capacity(10); // stale geometry from elsewhere
    system.attach_sink(Box::new(sink.clone()));

    let before = system.simulation().unwrap().directions().to_vec();
    system.step(1.0 / 24.0, 0.0);

    assert_eq!(sink.0.borrow().updates, 0, "mismatched sink must be skipped");
    let after = system.simulation().unwrap().directions();
    assert_ne!(after, before.as_slice(), "internal state must still advance");
}

#[test]
fn teardown_returns_to_unbuilt() {
    let mut system = WaveSystem::new();
    system.rebuild(small_params(100, 3));
    assert!(system.is_built());

    system.teardown();
    assert!(!system.is_built());
    system.step(1.0 / 24.0, 0.0); // must not panic
    // Tearing down twice is fine as well.
    system.teardown();
}

#[test]
fn rebuild_replaces_the_prior_build_wholesale() {
    let mut system = WaveSystem::new();
    system.rebuild(small_params(100, 3));
    let initial = system.rebuild(small_params(60, 4));
    assert_eq!(initial.len(), 60);
    assert_eq!(system.simulation().unwrap().len(), 60);
    assert_eq!(system.simulation().unwrap().params().seed, 4);
}

#[test]
fn bulk_advance_equals_manual_stepping() {
    let params = SimParams {
        diffusion: 0.0,
        ..small_params(300, 11)
    };

    let mut batch = WaveSystem::new();
    batch.rebuild(params.clone());
    let mut batch_clock = FrameClock::new(24);
    batch.advance(&mut batch_clock, 10.0);
    assert_eq!(batch_clock.frame, 240);

    let mut manual = WaveSystem::new();
    manual.rebuild(params);
    let mut manual_clock = FrameClock::new(24);
    for _ in 0..240 {
        let (dt, t) = manual_clock.tick();
        manual.step(dt, t);
    }

    assert_eq!(
        batch.simulation().unwrap().directions(),
        manual.simulation().unwrap().directions()
    );
}

#[test]
fn frame_clock_maps_frames_to_seconds() {
    let mut clock = FrameClock::new(24);
    assert_eq!(clock.time(), 0.0);
    let (dt, t) = clock.tick();
    assert!((dt - 1.0 / 24.0).abs() < 1e-7);
    assert!((t - 1.0 / 24.0).abs() < 1e-7);

    // Degenerate rates are pinned to one frame per second.
    let pinned = FrameClock::new(0);
    assert_eq!(pinned.fps, 1);
}
