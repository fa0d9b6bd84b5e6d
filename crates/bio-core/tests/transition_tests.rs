// Host-side tests for the section switch and panel entrance motion.

use bio_core::constants::{SECTION_BLUR_PX, SECTION_SHIFT_PX};
use bio_core::{PanelStyle, PanelTween, SectionSwitch, SwitchPhase};
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Profile,
    Links,
    Extra,
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn settled(t0: Instant) -> SectionSwitch<Tab> {
    let mut switch = SectionSwitch::new(Tab::Profile, t0);
    assert!(!switch.tick(t0 + ms(700)));
    switch
}

#[test]
fn initial_section_plays_its_entrance() {
    let t0 = Instant::now();
    let mut switch = SectionSwitch::new(Tab::Profile, t0);
    assert_eq!(switch.phase(), SwitchPhase::Entering);
    assert_eq!(
        switch.style(t0),
        PanelStyle::hidden(SECTION_SHIFT_PX, SECTION_BLUR_PX)
    );

    assert!(switch.tick(t0 + ms(300)));
    assert!(!switch.tick(t0 + ms(700)));
    assert_eq!(switch.phase(), SwitchPhase::Idle);
    assert_eq!(switch.style(t0 + ms(700)), PanelStyle::SHOWN);
}

#[test]
fn settled_switch_shows_its_section_without_motion() {
    let t0 = Instant::now();
    let mut switch = SectionSwitch::settled(Tab::Links);
    assert_eq!(switch.shown(), Tab::Links);
    assert_eq!(switch.phase(), SwitchPhase::Idle);
    assert_eq!(switch.style(t0), PanelStyle::SHOWN);
    assert!(!switch.tick(t0));
}

#[test]
fn selecting_the_shown_section_needs_no_frames() {
    let t0 = Instant::now();
    let mut switch = settled(t0);
    assert!(!switch.select(Tab::Profile, t0 + ms(800)));
    assert!(!switch.is_animating());
}

#[test]
fn old_panel_exits_before_new_one_enters() {
    let t0 = Instant::now();
    let mut switch = settled(t0);
    let t1 = t0 + ms(800);

    assert!(switch.select(Tab::Links, t1));
    assert_eq!(switch.phase(), SwitchPhase::Exiting);
    assert_eq!(switch.shown(), Tab::Profile);
    assert_eq!(switch.target(), Tab::Links);

    // Mid-exit: fading, rising and blurring
    assert!(switch.tick(t1 + ms(300)));
    let mid = switch.style(t1 + ms(300));
    assert!(mid.opacity < 0.5 && mid.opacity > 0.0);
    assert!(mid.offset_y < 0.0 && mid.offset_y > -SECTION_SHIFT_PX);
    assert!(mid.blur_px > 0.0);
    assert_eq!(switch.shown(), Tab::Profile);

    // Exit done: the new panel starts below, transparent and blurred
    let t2 = t1 + ms(700);
    assert!(switch.tick(t2));
    assert_eq!(switch.shown(), Tab::Links);
    assert_eq!(switch.phase(), SwitchPhase::Entering);
    assert_eq!(
        switch.style(t2),
        PanelStyle::hidden(SECTION_SHIFT_PX, SECTION_BLUR_PX)
    );

    assert!(!switch.tick(t2 + ms(700)));
    assert_eq!(switch.phase(), SwitchPhase::Idle);
    assert_eq!(switch.style(t2 + ms(700)), PanelStyle::SHOWN);
}

#[test]
fn reselecting_mid_exit_brings_the_panel_back() {
    let t0 = Instant::now();
    let mut switch = settled(t0);
    let t1 = t0 + ms(800);
    switch.select(Tab::Links, t1);
    switch.tick(t1 + ms(200));

    assert!(switch.select(Tab::Profile, t1 + ms(200)));
    assert_eq!(switch.phase(), SwitchPhase::Entering);
    assert_eq!(switch.target(), Tab::Profile);
    // Resumes from where the exit was, not from fully hidden
    let resumed = switch.style(t1 + ms(200));
    assert!(resumed.opacity > 0.0);

    assert!(!switch.tick(t1 + ms(1000)));
    assert_eq!(switch.shown(), Tab::Profile);
}

#[test]
fn redirect_mid_exit_keeps_the_running_exit() {
    let t0 = Instant::now();
    let mut switch = settled(t0);
    let t1 = t0 + ms(800);
    switch.select(Tab::Links, t1);
    let before = switch.style(t1 + ms(300));

    assert!(switch.select(Tab::Extra, t1 + ms(300)));
    assert_eq!(switch.phase(), SwitchPhase::Exiting);
    assert_eq!(switch.style(t1 + ms(300)), before);

    assert!(switch.tick(t1 + ms(700)));
    assert_eq!(switch.shown(), Tab::Extra);
}

#[test]
fn title_drops_in_from_above() {
    let t0 = Instant::now();
    let tween = PanelTween::drop_in(t0);
    let start = tween.sample(t0);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.offset_y, -SECTION_SHIFT_PX);
    assert_eq!(start.blur_px, 0.0);

    assert!(!tween.is_finished(t0 + ms(300)));
    assert!(tween.is_finished(t0 + ms(700)));
    assert_eq!(tween.sample(t0 + ms(700)), PanelStyle::SHOWN);
}
