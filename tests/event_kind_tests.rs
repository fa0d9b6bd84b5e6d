// Host-side tests for DOM event classification.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod kind {
    include!("../src/events/kind.rs");
}

use bio_core::PointerKind;
use kind::*;

#[test]
fn every_listened_event_maps_to_a_kind() {
    for ev in CURSOR_EVENTS.iter().chain(VIEWPORT_EVENTS.iter()) {
        assert!(pointer_kind(ev, false).is_some(), "unmapped event {}", ev);
    }
}

#[test]
fn mouseover_carries_interactive_flag() {
    assert_eq!(
        pointer_kind("mouseover", true),
        Some(PointerKind::Over { interactive: true })
    );
    assert_eq!(
        pointer_kind("mouseover", false),
        Some(PointerKind::Over { interactive: false })
    );
}

#[test]
fn viewport_events_map_to_leave_and_enter() {
    assert_eq!(pointer_kind("mouseleave", false), Some(PointerKind::Leave));
    assert_eq!(pointer_kind("mouseenter", false), Some(PointerKind::Enter));
}

#[test]
fn unrelated_events_are_ignored() {
    assert_eq!(pointer_kind("click", false), None);
    assert_eq!(pointer_kind("touchmove", false), None);
    assert_eq!(pointer_kind("", false), None);
}

#[test]
fn tilt_card_tracks_touch_from_the_first_contact() {
    assert!(CARD_TOUCH_EVENTS.contains(&"touchstart"));
    assert!(CARD_TOUCH_EVENTS.contains(&"touchmove"));
}

#[test]
fn tilt_card_releases_on_every_exit() {
    for ev in ["mouseleave", "touchend", "touchcancel"] {
        assert!(CARD_RELEASE_EVENTS.contains(&ev), "missing {}", ev);
    }
    // tracking and releasing never overlap
    for ev in CARD_TOUCH_EVENTS {
        assert!(!CARD_RELEASE_EVENTS.contains(&ev));
    }
}
