// Host-side tests for easing curves, tweens and springs.

use bio_core::{CubicBezier, Easing, Spring, Tween, EASE_OUT, EASE_OUT_EXPO, EASE_OUT_QUINT};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

#[test]
fn bezier_endpoints_are_exact() {
    for curve in [EASE_OUT, EASE_OUT_EXPO, EASE_OUT_QUINT] {
        assert_eq!(curve.ease(0.0), 0.0);
        assert_eq!(curve.ease(1.0), 1.0);
        assert_eq!(curve.ease(-3.0), 0.0);
        assert_eq!(curve.ease(7.0), 1.0);
    }
}

#[test]
fn bezier_curves_are_monotonic() {
    for curve in [EASE_OUT, EASE_OUT_EXPO, EASE_OUT_QUINT] {
        let mut last = 0.0;
        for i in 0..=200 {
            let y = curve.ease(i as f32 / 200.0);
            assert!(y >= last - 1e-5, "{:?} dipped at {}", curve, i);
            last = y;
        }
    }
}

#[test]
fn ease_out_front_loads_progress() {
    assert!(EASE_OUT.ease(0.5) > 0.6);
    assert!(EASE_OUT_QUINT.ease(0.5) > EASE_OUT.ease(0.5));
}

#[test]
fn linear_bezier_matches_identity() {
    let linear = CubicBezier::new(0.25, 0.25, 0.75, 0.75);
    for i in 0..=10 {
        let x = i as f32 / 10.0;
        assert!((linear.ease(x) - x).abs() < 1e-4);
        assert!((Easing::Linear.apply(x) - x).abs() < 1e-6);
    }
}

#[test]
fn tween_hits_both_ends() {
    let t0 = Instant::now();
    let tween = Tween::new(
        Vec2::new(10.0, -4.0),
        Vec2::ZERO,
        Duration::from_millis(500),
        Easing::Bezier(EASE_OUT),
        t0,
    );
    assert_eq!(tween.sample(t0), Vec2::new(10.0, -4.0));
    assert!(!tween.is_finished(t0 + Duration::from_millis(499)));
    assert_eq!(tween.sample(t0 + Duration::from_millis(500)), Vec2::ZERO);
    assert!(tween.is_finished(t0 + Duration::from_secs(9)));
}

#[test]
fn zero_duration_tween_is_already_done() {
    let t0 = Instant::now();
    let tween = Tween::new(1.0_f32, 5.0, Duration::ZERO, Easing::Linear, t0);
    assert!(tween.is_finished(t0));
    assert_eq!(tween.sample(t0), 5.0);
}

#[test]
fn retarget_starts_from_current_value() {
    let t0 = Instant::now();
    let mut tween = Tween::new(0.0_f32, 1.0, Duration::from_millis(200), Easing::Linear, t0);
    let mid = t0 + Duration::from_millis(100);
    tween.retarget(0.0, mid);

    assert!((tween.from - 0.5).abs() < 1e-4);
    assert!((tween.sample(mid) - 0.5).abs() < 1e-4);
    assert_eq!(tween.sample(mid + Duration::from_millis(200)), 0.0);
}

#[test]
fn spring_settles_on_target() {
    let mut spring = Spring::new(1.0, 150.0, 15.0);
    spring.set_target(0.7);
    let mut peak_below = f32::MAX;
    for _ in 0..300 {
        let v = spring.step(1.0 / 60.0);
        peak_below = peak_below.min(v);
    }
    assert!(spring.is_settled());
    assert_eq!(spring.value, 0.7);
    // Underdamped: it overshoots below the target on the way
    assert!(peak_below < 0.7);
}

#[test]
fn spring_caps_long_frames() {
    let mut spring = Spring::new(0.0, 300.0, 25.0);
    spring.set_target(1.0);
    let v = spring.step(10.0);
    assert!(v.is_finite());
    assert!(v < 1.5);
}
