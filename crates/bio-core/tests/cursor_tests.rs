// Host-side tests for the eased cursor and its magnet coupling.

use bio_core::constants::*;
use bio_core::{
    cursor_visual, CursorConfig, CursorMotion, CursorTracker, ElementId, PointerKind, Rect,
};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn no_geometry(_: ElementId) -> Option<Rect> {
    None
}

fn tracker() -> CursorTracker {
    CursorTracker::new(VIEWPORT, CursorConfig::default())
}

#[test]
fn starts_hidden_at_viewport_center() {
    let t = tracker();
    assert_eq!(t.smoothed(), Vec2::new(400.0, 300.0));
    assert_eq!(t.raw(), Vec2::new(400.0, 300.0));
    assert!(!t.is_visible());
    assert!(!t.is_running());
}

#[test]
fn loop_start_is_idempotent() {
    let mut t = tracker();
    assert!(t.on_pointer(PointerKind::Move, Vec2::new(10.0, 10.0), &no_geometry));
    assert!(t.is_running());
    assert!(!t.on_pointer(PointerKind::Move, Vec2::new(20.0, 10.0), &no_geometry));
    assert!(!t.on_pointer(PointerKind::Down, Vec2::new(20.0, 10.0), &no_geometry));

    t.stop();
    assert!(!t.is_running());
    assert!(t.on_pointer(PointerKind::Move, Vec2::new(30.0, 10.0), &no_geometry));
}

#[test]
fn target_is_raw_pointer_without_magnets() {
    let mut t = tracker();
    for &p in &[
        Vec2::new(0.0, 0.0),
        Vec2::new(799.0, 1.0),
        Vec2::new(123.5, 456.25),
    ] {
        t.on_pointer(PointerKind::Move, p, &no_geometry);
        assert_eq!(t.frame_target(), p);
    }
}

#[test]
fn advance_closes_a_fifth_of_the_gap() {
    let mut t = tracker();
    t.on_pointer(PointerKind::Move, Vec2::new(500.0, 300.0), &no_geometry);

    let p = t.advance();
    assert!((p.x - 420.0).abs() < 1e-4);
    assert!((p.y - 300.0).abs() < 1e-4);

    for _ in 0..200 {
        t.advance();
    }
    assert!(t.smoothed().distance(Vec2::new(500.0, 300.0)) < 1e-2);
}

#[test]
fn visibility_follows_reveal_and_viewport_edges() {
    let mut t = tracker();
    t.on_pointer(PointerKind::Move, Vec2::new(1.0, 1.0), &no_geometry);
    assert!(!t.is_visible());

    t.reveal();
    assert!(t.is_visible());

    t.on_pointer(PointerKind::Leave, Vec2::new(-1.0, 1.0), &no_geometry);
    assert!(!t.is_visible());
    assert_eq!(t.visual().dot_opacity, 0.0);
    assert_eq!(t.visual().ring_opacity, 0.0);

    t.on_pointer(PointerKind::Enter, Vec2::new(1.0, 1.0), &no_geometry);
    assert!(t.is_visible());
    assert_eq!(t.visual().dot_opacity, 1.0);
}

#[test]
fn press_and_hover_drive_indicator_scale() {
    let mut t = tracker();
    t.reveal();
    assert_eq!(t.visual().dot_scale, 1.0);

    t.on_pointer(PointerKind::Over { interactive: true }, Vec2::ZERO, &no_geometry);
    assert!(t.is_link_hovered());
    assert_eq!(t.visual().dot_scale, DOT_SCALE_HOVER);
    assert_eq!(t.visual().ring_opacity, RING_OPACITY_HOVER);

    t.on_pointer(PointerKind::Down, Vec2::ZERO, &no_geometry);
    assert_eq!(t.visual().dot_scale, DOT_SCALE_PRESSED);
    assert_eq!(t.visual().ring_scale, RING_SCALE_PRESSED);

    t.on_pointer(PointerKind::Up, Vec2::ZERO, &no_geometry);
    t.on_pointer(PointerKind::Over { interactive: false }, Vec2::ZERO, &no_geometry);
    assert_eq!(t.visual().dot_scale, 1.0);
    assert_eq!(t.visual().ring_opacity, RING_OPACITY_IDLE);
}

#[test]
fn magnet_capture_applies_on_the_same_frame() {
    let magnet = Rect::centered(Vec2::new(450.0, 300.0), 40.0, 40.0);
    let geometry = move |id: ElementId| (id == ElementId(1)).then_some(magnet);
    let mut t = tracker();
    t.reveal();
    t.refresh_magnets([ElementId(1)]);

    // 10 px from the magnet center
    t.on_pointer(PointerKind::Move, Vec2::new(440.0, 300.0), &geometry);
    let state = *t.magnet().unwrap();
    assert!((state.strength - (1.0 - 10.0 / 120.0)).abs() < 1e-5);

    let expected = 400.0 + (450.0 - 400.0) * state.strength * MAGNET_PULL;
    assert!((t.frame_target().x - expected).abs() < 1e-3);
    let p = t.advance();
    assert!((p.x - expected).abs() < 1e-3);
    assert!((p.y - 300.0).abs() < 1e-3);

    let v = t.visual();
    assert_eq!(v.dot_scale, DOT_SCALE_MAGNETIC);
    assert_eq!(v.ring_scale, RING_SCALE_MAGNETIC);
    assert_eq!(v.ring_opacity, RING_OPACITY_MAGNETIC);
}

#[test]
fn leaving_the_radius_reverts_to_raw_tracking() {
    let magnet = Rect::centered(Vec2::new(450.0, 300.0), 40.0, 40.0);
    let geometry = move |_: ElementId| Some(magnet);
    let mut t = tracker();
    t.refresh_magnets([ElementId(1)]);

    t.on_pointer(PointerKind::Move, Vec2::new(440.0, 300.0), &geometry);
    assert!(t.magnet().is_some());

    t.on_pointer(PointerKind::Move, Vec2::new(100.0, 100.0), &geometry);
    assert!(t.magnet().is_none());
    assert_eq!(t.frame_target(), Vec2::new(100.0, 100.0));
}

#[test]
fn unmounted_magnet_releases_the_cursor() {
    let magnet = Rect::centered(Vec2::new(450.0, 300.0), 40.0, 40.0);
    let geometry = move |_: ElementId| Some(magnet);
    let mut t = tracker();
    t.refresh_magnets([ElementId(1)]);
    t.on_pointer(PointerKind::Move, Vec2::new(440.0, 300.0), &geometry);

    assert!(t.refresh_magnets(std::iter::empty()));
    assert!(t.magnet().is_none());
    assert_eq!(t.frame_target(), Vec2::new(440.0, 300.0));
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    let cfg = CursorConfig {
        speed_factor: f32::NAN,
        magnet_radius: -5.0,
        ..CursorConfig::default()
    };
    let t = CursorTracker::new(VIEWPORT, cfg);
    assert_eq!(t.config().speed_factor, CURSOR_SPEED_FACTOR);
    assert_eq!(t.config().magnet_radius, MAGNET_RADIUS);
}

#[test]
fn motion_springs_settle_on_target_scale() {
    let t0 = Instant::now();
    let mut motion = CursorMotion::new(t0);
    let target = cursor_visual(false, true, false, true);

    let mut now = t0;
    let mut current = motion.update(target, now, 0.0);
    for _ in 0..240 {
        now += Duration::from_millis(16);
        current = motion.update(target, now, 0.016);
    }
    assert_eq!(current.dot_scale, DOT_SCALE_HOVER);
    assert_eq!(current.ring_scale, RING_SCALE_HOVER);
    assert_eq!(current.dot_opacity, 1.0);
    assert_eq!(current.ring_opacity, RING_OPACITY_HOVER);
}

#[test]
fn opacity_fades_over_a_fifth_of_a_second() {
    let t0 = Instant::now();
    let mut motion = CursorMotion::new(t0);
    let shown = cursor_visual(false, false, false, true);

    let first = motion.update(shown, t0, 0.0);
    assert_eq!(first.dot_opacity, 0.0);
    let mid = motion.update(shown, t0 + Duration::from_millis(100), 0.1);
    assert!(mid.dot_opacity > 0.4 && mid.dot_opacity < 0.6);
    let done = motion.update(shown, t0 + Duration::from_millis(200), 0.1);
    assert_eq!(done.dot_opacity, 1.0);
}
