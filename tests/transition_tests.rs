// Host-side tests for the page transition state machine.

use ambient_core::constants::*;
use ambient_core::*;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const VIEWPORT: Vec2 = Vec2::new(1000.0, 800.0);

fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let hits = Rc::new(Cell::new(0));
    let inner = hits.clone();
    (hits, move || inner.set(inner.get() + 1))
}

#[test]
fn midpoint_fires_once_after_fifty_ticks() {
    let mut overlay = TransitionOverlay::default();
    let mut surface = RecordingSurface::new(VIEWPORT.x, VIEWPORT.y);
    let mut clock = ManualClock::with_step(16.0);
    let (hits, cb) = counter();

    assert!(overlay.transition(VIEWPORT, cb));
    assert_eq!(drive(&mut overlay, &mut surface, &mut clock, 49), 49);
    assert_eq!(hits.get(), 0);
    assert!(overlay.progress() < 1.0);
    assert_eq!(overlay.phase(), TransitionPhase::Running { frames: 49 });

    drive(&mut overlay, &mut surface, &mut clock, 1);
    assert_eq!(hits.get(), 1);
    assert!(overlay.progress() >= 1.0);
    assert!(matches!(overlay.phase(), TransitionPhase::Holding { .. }));

    // Holding frames neither draw nor re-fire.
    surface.ops.clear();
    drive(&mut overlay, &mut surface, &mut clock, 5);
    assert!(surface.ops.is_empty());
    assert_eq!(hits.get(), 1);
}

#[test]
fn fades_out_twenty_ticks_after_hold() {
    let mut overlay = TransitionOverlay::default();
    let mut surface = RecordingSurface::new(VIEWPORT.x, VIEWPORT.y);
    let mut clock = ManualClock::with_step(16.0);
    let (hits, cb) = counter();

    overlay.transition(VIEWPORT, cb);
    drive(&mut overlay, &mut surface, &mut clock, 50);
    clock.advance(TRANSITION_HOLD_MS);

    assert_eq!(drive(&mut overlay, &mut surface, &mut clock, 19), 19);
    assert_eq!(overlay.phase(), TransitionPhase::Fading { frames: 19 });
    assert!(overlay.fade_alpha() > 0.0);

    assert_eq!(drive(&mut overlay, &mut surface, &mut clock, 5), 1);
    assert_eq!(overlay.phase(), TransitionPhase::Idle);
    assert!(!overlay.is_active());
    assert_eq!(hits.get(), 1);
}

#[test]
fn hold_lasts_the_configured_delay() {
    let mut overlay = TransitionOverlay::default();
    let mut surface = RecordingSurface::new(VIEWPORT.x, VIEWPORT.y);
    let mut clock = ManualClock::with_step(10.0);
    overlay.transition(VIEWPORT, || {});
    drive(&mut overlay, &mut surface, &mut clock, 50);

    // 29 x 10ms stays inside the 300ms hold; the 30th tick lands on it.
    drive(&mut overlay, &mut surface, &mut clock, 29);
    assert!(matches!(overlay.phase(), TransitionPhase::Holding { .. }));
    drive(&mut overlay, &mut surface, &mut clock, 1);
    assert_eq!(overlay.phase(), TransitionPhase::Fading { frames: 1 });
}

#[test]
fn reentrant_transition_is_a_silent_no_op() {
    let mut overlay = TransitionOverlay::default();
    let mut surface = RecordingSurface::new(VIEWPORT.x, VIEWPORT.y);
    let mut clock = ManualClock::with_step(16.0);
    let (first, cb) = counter();
    let (second, cb2) = counter();

    overlay.transition(VIEWPORT, cb);
    drive(&mut overlay, &mut surface, &mut clock, 10);
    let (phase, progress) = (overlay.phase(), overlay.progress());
    assert!(!overlay.transition(Vec2::new(10.0, 10.0), cb2));
    assert_eq!(overlay.phase(), phase);
    assert_eq!(overlay.progress(), progress);

    drive(&mut overlay, &mut surface, &mut clock, 40);
    clock.advance(TRANSITION_HOLD_MS);
    drive(&mut overlay, &mut surface, &mut clock, 10);
    let (third, cb3) = counter();
    assert!(matches!(overlay.phase(), TransitionPhase::Fading { .. }));
    assert!(!overlay.transition(VIEWPORT, cb3));

    drive(&mut overlay, &mut surface, &mut clock, 20);
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 0);
    assert_eq!(third.get(), 0);
}

#[test]
fn start_from_midpoint_on_shared_overlay_is_ignored() {
    let shared = Rc::new(RefCell::new(TransitionOverlay::default()));
    let mut surface = RecordingSurface::new(VIEWPORT.x, VIEWPORT.y);
    let mut clock = ManualClock::with_step(16.0);
    let nested = Rc::new(Cell::new(None));

    let (cell, seen) = (shared.clone(), nested.clone());
    assert!(TransitionOverlay::try_start(&shared, VIEWPORT, move || {
        seen.set(Some(TransitionOverlay::try_start(&cell, VIEWPORT, || {})));
    }));

    // The frame loop holds the borrow while the midpoint callback runs.
    for _ in 0..50 {
        let now = clock.tick();
        shared.borrow_mut().tick(now, &mut surface);
    }
    assert_eq!(nested.get(), Some(false));
    assert!(matches!(
        shared.borrow().phase(),
        TransitionPhase::Holding { .. }
    ));

    clock.advance(TRANSITION_HOLD_MS);
    for _ in 0..20 {
        let now = clock.tick();
        shared.borrow_mut().tick(now, &mut surface);
    }
    assert!(!shared.borrow().is_active());
    assert!(TransitionOverlay::try_start(&shared, VIEWPORT, || {}));
}

#[test]
fn zero_steps_are_rejected() {
    let stalled = TransitionConfig {
        progress_step: 0.0,
        ..TransitionConfig::default()
    };
    assert!(matches!(
        TransitionOverlay::new(stalled),
        Err(ConfigError::NonPositive {
            name: "transition progress_step",
            ..
        })
    ));

    let endless_fade = TransitionConfig {
        fade_step: 0.0,
        ..TransitionConfig::default()
    };
    assert!(TransitionOverlay::new(endless_fade).is_err());

    let mut overlay = TransitionOverlay::new(TransitionConfig::default()).unwrap();
    let mut surface = RecordingSurface::new(VIEWPORT.x, VIEWPORT.y);
    let mut clock = ManualClock::with_step(16.0);
    overlay.transition(VIEWPORT, || {});
    let ran = drive(&mut overlay, &mut surface, &mut clock, 1000);
    assert!(ran < 1000);
    assert!(!overlay.is_active());
}

#[test]
fn guard_is_released_after_fade() {
    let mut overlay = TransitionOverlay::default();
    let mut surface = RecordingSurface::new(VIEWPORT.x, VIEWPORT.y);
    let mut clock = ManualClock::with_step(16.0);
    overlay.transition(VIEWPORT, || {});
    drive(&mut overlay, &mut surface, &mut clock, 50);
    clock.advance(TRANSITION_HOLD_MS);
    drive(&mut overlay, &mut surface, &mut clock, 20);
    assert!(!overlay.is_active());

    let (hits, cb) = counter();
    assert!(overlay.transition(VIEWPORT, cb));
    assert_eq!(overlay.progress(), 0.0);
    drive(&mut overlay, &mut surface, &mut clock, 50);
    assert_eq!(hits.get(), 1);
}

#[test]
fn running_frame_paints_a_ring_of_blobs() {
    let mut overlay = TransitionOverlay::default();
    let mut surface = RecordingSurface::new(VIEWPORT.x, VIEWPORT.y);
    let mut clock = ManualClock::with_step(16.0);
    overlay.transition(VIEWPORT, || {});
    drive(&mut overlay, &mut surface, &mut clock, 25);

    surface.ops.clear();
    drive(&mut overlay, &mut surface, &mut clock, 1);
    let progress = overlay.progress();
    assert!((progress - 26.0 * TRANSITION_PROGRESS_STEP).abs() < 1e-5);

    assert_eq!(surface.ops[0], DrawOp::Clear);
    assert_eq!(surface.radial_count(), TRANSITION_BLOB_COUNT);

    let center = VIEWPORT * 0.5;
    let ring = center.length() * progress;
    let expected_x = center.x + ring * (1.0 + (progress * 10.0).sin() * 0.1);
    match &surface.ops[1] {
        DrawOp::FillRadial {
            center: c,
            radius,
            inner,
            outer,
        } => {
            assert!((c.x - expected_x).abs() < 1e-2);
            assert!((c.y - center.y).abs() < 1e-2);
            assert_eq!(*radius, TRANSITION_BLOB_RADIUS);
            assert_eq!(*inner, TRANSITION_BLOB_COLOR);
            assert_eq!(outer.a, 0.0);
        }
        other => panic!("expected gradient blob, got {:?}", other),
    }
}

#[test]
fn fade_lowers_global_alpha_each_tick() {
    let mut overlay = TransitionOverlay::default();
    let mut surface = RecordingSurface::new(VIEWPORT.x, VIEWPORT.y);
    let mut clock = ManualClock::with_step(16.0);
    overlay.transition(VIEWPORT, || {});
    drive(&mut overlay, &mut surface, &mut clock, 50);
    clock.advance(TRANSITION_HOLD_MS);
    surface.ops.clear();
    drive(&mut overlay, &mut surface, &mut clock, 20);

    let alphas: Vec<f32> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::GlobalAlpha(a) => Some(*a),
            _ => None,
        })
        .collect();
    // 19 visible fade frames, then a reset to full alpha on teardown.
    assert_eq!(alphas.len(), 20);
    for (i, a) in alphas[..19].iter().enumerate() {
        let expected = 1.0 - (i as f32 + 1.0) * TRANSITION_FADE_STEP;
        assert!((a - expected).abs() < 1e-5, "frame {} alpha {}", i, a);
    }
    assert_eq!(alphas[19], 1.0);
}

#[test]
fn idle_overlay_stops_immediately() {
    let mut overlay = TransitionOverlay::default();
    let mut surface = RecordingSurface::new(VIEWPORT.x, VIEWPORT.y);
    let mut clock = ManualClock::new();
    assert_eq!(drive(&mut overlay, &mut surface, &mut clock, 10), 1);
    assert!(surface.ops.is_empty());
    assert_eq!(overlay.fade_alpha(), 0.0);
}
