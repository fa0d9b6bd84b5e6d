// Host-side tests for the tilt card mapping and its eased reset.

use bio_core::{Rect, TiltCard, TiltConfig, TiltPose};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

fn card_rect() -> Rect {
    // 400x400 card centered on (300, 300)
    Rect::new(100.0, 100.0, 400.0, 400.0)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn pointer_at_center_is_at_rest() {
    let mut card = TiltCard::default();
    assert!(card.pointer_move(Vec2::new(300.0, 300.0), Some(card_rect())));

    let pose = card.pose();
    assert_eq!(card.offset(), Vec2::ZERO);
    assert_eq!(pose.rotate_x, 0.0);
    assert_eq!(pose.rotate_y, 0.0);
    assert_eq!(pose.image_z, 0.0);
    assert!(approx(pose.glow_opacity, 0.2));
    assert!(approx(pose.light_x, 0.0));
    assert!(approx(pose.light_y, 0.0));
}

#[test]
fn full_right_offset_reaches_max_rotate_y() {
    let mut card = TiltCard::default();
    card.pointer_move(Vec2::new(600.0, 300.0), Some(card_rect()));

    let pose = card.pose();
    assert_eq!(card.offset(), Vec2::new(300.0, 0.0));
    assert!(approx(pose.rotate_y, 20.0));
    assert!(approx(pose.rotate_x, 0.0));
    assert!(approx(pose.image_z, 10.0));
    assert!(approx(pose.glow_opacity, 0.4));
    assert!(approx(pose.light_x, 20.0));
}

#[test]
fn pointer_below_center_tilts_top_edge_away() {
    let mut card = TiltCard::default();
    card.pointer_move(Vec2::new(300.0, 450.0), Some(card_rect()));

    let pose = card.pose();
    assert!(pose.rotate_x < 0.0);
    assert!(approx(pose.rotate_x, -10.0));
    assert!(approx(pose.rotate_y, 0.0));
}

#[test]
fn rotation_is_clamped_for_extreme_offsets() {
    let cfg = TiltConfig::default();
    for &(x, y) in &[
        (1.0e6, 1.0e6),
        (-1.0e6, 1.0e6),
        (5000.0, -42.0),
        (-301.0, -301.0),
        (0.0, -9.0e5),
    ] {
        let pose = TiltPose::from_offset(Vec2::new(x, y), &cfg);
        assert!(pose.rotate_x.abs() <= cfg.max_deg + 1e-5, "rx {}", pose.rotate_x);
        assert!(pose.rotate_y.abs() <= cfg.max_deg + 1e-5, "ry {}", pose.rotate_y);
        assert!(pose.light_x.abs() <= cfg.light_range + 1e-5);
        assert!(pose.light_y.abs() <= cfg.light_range + 1e-5);
    }
}

#[test]
fn derived_cues_never_exceed_their_caps() {
    // Steep gains so the caps, not the rotation range, are what bound the output
    let cfg = TiltConfig {
        image_z_gain: 2.0,
        glow_gain: 1.0,
        ambient_gain: 1.0,
        edge_gain: 5.0,
        ..TiltConfig::default()
    };
    let mut last_z = 0.0;
    for i in 0..=60 {
        let off = Vec2::splat(i as f32 * 25.0);
        let pose = TiltPose::from_offset(off, &cfg);
        assert!(pose.image_z <= cfg.image_z_max + 1e-5);
        assert!(pose.glow_opacity <= cfg.glow_base + cfg.glow_max + 1e-5);
        assert!(pose.ambient_opacity <= cfg.ambient_base + cfg.ambient_max + 1e-5);
        assert!(pose.edge_size <= cfg.edge_base + cfg.edge_max + 1e-5);
        assert!(pose.image_z >= last_z, "image_z must not decrease");
        last_z = pose.image_z;
    }
    let far = TiltPose::from_offset(Vec2::splat(1.0e5), &cfg);
    assert!(approx(far.image_z, 30.0));
    assert!(approx(far.glow_opacity, 0.8));
}

#[test]
fn single_touch_contact_tilts_the_card() {
    let mut card = TiltCard::default();
    assert!(card.touch_move(Vec2::new(300.0, 500.0), Some(card_rect())));
    assert_eq!(card.offset(), Vec2::new(0.0, 100.0));
    assert!(card.pose().rotate_x < 0.0);
}

#[test]
fn touch_offset_is_damped() {
    let mut card = TiltCard::default();
    card.touch_move(Vec2::new(600.0, 300.0), Some(card_rect()));

    assert_eq!(card.offset(), Vec2::new(150.0, 0.0));
    assert!(approx(card.pose().rotate_y, 10.0));
}

#[test]
fn missing_container_is_a_no_op() {
    let mut card = TiltCard::default();
    card.pointer_move(Vec2::new(450.0, 300.0), Some(card_rect()));
    let before = card.offset();

    assert!(!card.pointer_move(Vec2::new(0.0, 0.0), None));
    assert!(!card.touch_move(Vec2::new(0.0, 0.0), None));
    assert!(!card.pointer_move(Vec2::new(0.0, 0.0), Some(Rect::new(0.0, 0.0, 0.0, 0.0))));
    assert_eq!(card.offset(), before);
}

#[test]
fn leave_eases_back_to_zero_within_duration() {
    let mut card = TiltCard::default();
    card.pointer_move(Vec2::new(600.0, 100.0), Some(card_rect()));
    let start = card.offset();
    let t0 = Instant::now();

    assert!(card.leave(t0));
    assert!(card.is_resetting());

    // Mid-way: moving toward rest but not there yet
    assert!(card.tick(t0 + Duration::from_millis(250)));
    let mid = card.offset();
    assert!(mid.length() > 0.0);
    assert!(mid.length() < start.length());
    // Ease-out covers more than half the distance in the first half
    assert!(mid.length() < start.length() * 0.5);

    // Done at the configured duration
    assert!(!card.tick(t0 + Duration::from_millis(500)));
    assert_eq!(card.offset(), Vec2::ZERO);
    assert!(!card.is_resetting());

    // And stays there until the next move
    assert!(!card.tick(t0 + Duration::from_secs(3)));
    assert_eq!(card.offset(), Vec2::ZERO);
    assert_eq!(card.pose(), TiltPose::rest(card.config()));
}

#[test]
fn leave_at_rest_needs_no_animation() {
    let mut card = TiltCard::default();
    assert!(!card.leave(Instant::now()));
    assert!(!card.is_resetting());
}

#[test]
fn move_during_reset_cancels_it() {
    let mut card = TiltCard::default();
    card.pointer_move(Vec2::new(500.0, 300.0), Some(card_rect()));
    let t0 = Instant::now();
    card.leave(t0);
    card.tick(t0 + Duration::from_millis(100));

    card.pointer_move(Vec2::new(300.0, 400.0), Some(card_rect()));
    assert!(!card.is_resetting());
    assert_eq!(card.offset(), Vec2::new(0.0, 100.0));
    assert!(!card.tick(t0 + Duration::from_millis(200)));
    assert_eq!(card.offset(), Vec2::new(0.0, 100.0));
}

#[test]
fn oversized_reset_duration_is_capped() {
    let cfg = TiltConfig {
        reset_sec: 1e30,
        ..TiltConfig::default()
    };
    let mut card = TiltCard::new(cfg);
    assert_eq!(card.config().reset_sec, 10.0);

    card.pointer_move(Vec2::new(500.0, 300.0), Some(card_rect()));
    let t0 = Instant::now();
    assert!(card.leave(t0));
    assert!(!card.tick(t0 + Duration::from_secs(10)));
    assert_eq!(card.offset(), Vec2::ZERO);
}
