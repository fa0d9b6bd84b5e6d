//! Panel enter/exit motion: opacity, vertical shift and blur.
//!
//! [`SectionSwitch`] sequences two phases: the shown panel exits completely
//! (fading out, rising and blurring) before the requested panel enters from
//! below. [`PanelTween`] is the single-phase building block, also used for the
//! title entrance.

use crate::constants::{
    SECTION_BLUR_PX, SECTION_BLUR_SEC, SECTION_SHIFT_PX, SECTION_SWITCH_SEC, TITLE_ENTER_SEC,
};
use crate::tween::{Easing, Tween, EASE_OUT_EXPO, EASE_OUT_QUINT};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelStyle {
    pub opacity: f32,
    /// Vertical shift in px; negative is up.
    pub offset_y: f32,
    pub blur_px: f32,
}

impl PanelStyle {
    pub const SHOWN: Self = Self {
        opacity: 1.0,
        offset_y: 0.0,
        blur_px: 0.0,
    };

    /// Transparent, shifted by `offset_y` and blurred by `blur_px`.
    #[inline]
    pub const fn hidden(offset_y: f32, blur_px: f32) -> Self {
        Self {
            opacity: 0.0,
            offset_y,
            blur_px,
        }
    }
}

/// Opacity and shift share one curve; blur runs on its own (shorter) clock.
#[derive(Clone, Copy, Debug)]
pub struct PanelTween {
    motion: Tween<Vec2>,
    blur: Tween<f32>,
}

impl PanelTween {
    pub fn new(
        from: PanelStyle,
        to: PanelStyle,
        duration: Duration,
        blur_duration: Duration,
        easing: Easing,
        now: Instant,
    ) -> Self {
        Self {
            motion: Tween::new(
                Vec2::new(from.opacity, from.offset_y),
                Vec2::new(to.opacity, to.offset_y),
                duration,
                easing,
                now,
            ),
            blur: Tween::new(from.blur_px, to.blur_px, blur_duration, easing, now),
        }
    }

    /// Title entrance: drop in from above without blur.
    pub fn drop_in(now: Instant) -> Self {
        let duration = Duration::from_secs_f32(TITLE_ENTER_SEC);
        Self::new(
            PanelStyle::hidden(-SECTION_SHIFT_PX, 0.0),
            PanelStyle::SHOWN,
            duration,
            duration,
            Easing::Bezier(EASE_OUT_EXPO),
            now,
        )
    }

    pub fn sample(&self, now: Instant) -> PanelStyle {
        let m = self.motion.sample(now);
        PanelStyle {
            opacity: m.x,
            offset_y: m.y,
            blur_px: self.blur.sample(now),
        }
    }

    #[inline]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.motion.is_finished(now) && self.blur.is_finished(now)
    }
}

fn switch_tween(from: PanelStyle, to: PanelStyle, now: Instant) -> PanelTween {
    PanelTween::new(
        from,
        to,
        Duration::from_secs_f32(SECTION_SWITCH_SEC),
        Duration::from_secs_f32(SECTION_BLUR_SEC),
        Easing::Bezier(EASE_OUT_QUINT),
        now,
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchPhase {
    Idle,
    Exiting,
    Entering,
}

/// Exit-then-enter switch between sections of type `S`.
#[derive(Clone, Copy, Debug)]
pub struct SectionSwitch<S> {
    shown: S,
    pending: Option<S>,
    phase: SwitchPhase,
    tween: Option<PanelTween>,
}

impl<S: Copy + PartialEq> SectionSwitch<S> {
    /// `initial` is shown at once and plays its entrance.
    pub fn new(initial: S, now: Instant) -> Self {
        Self {
            shown: initial,
            pending: None,
            phase: SwitchPhase::Entering,
            tween: Some(switch_tween(
                PanelStyle::hidden(SECTION_SHIFT_PX, SECTION_BLUR_PX),
                PanelStyle::SHOWN,
                now,
            )),
        }
    }

    /// `section` fully shown with nothing to animate.
    pub fn settled(section: S) -> Self {
        Self {
            shown: section,
            pending: None,
            phase: SwitchPhase::Idle,
            tween: None,
        }
    }

    /// Section whose panel is currently on screen.
    #[inline]
    pub fn shown(&self) -> S {
        self.shown
    }

    /// Section that will be on screen once the animation settles.
    #[inline]
    pub fn target(&self) -> S {
        self.pending.unwrap_or(self.shown)
    }

    #[inline]
    pub fn phase(&self) -> SwitchPhase {
        self.phase
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Style of the shown panel at `now`.
    pub fn style(&self, now: Instant) -> PanelStyle {
        self.tween
            .map(|t| t.sample(now))
            .unwrap_or(PanelStyle::SHOWN)
    }

    /// Request `section`. Returns `true` if the caller needs to drive
    /// [`SectionSwitch::tick`].
    pub fn select(&mut self, section: S, now: Instant) -> bool {
        if section == self.target() {
            return self.is_animating();
        }
        let from = self.style(now);
        if self.phase == SwitchPhase::Exiting && section == self.shown {
            // Changed mind mid-exit: bring the current panel back
            self.pending = None;
            self.phase = SwitchPhase::Entering;
            self.tween = Some(switch_tween(from, PanelStyle::SHOWN, now));
            return true;
        }
        if self.phase != SwitchPhase::Exiting {
            self.phase = SwitchPhase::Exiting;
            self.tween = Some(switch_tween(
                from,
                PanelStyle::hidden(-SECTION_SHIFT_PX, SECTION_BLUR_PX),
                now,
            ));
        }
        self.pending = Some(section);
        true
    }

    /// Advance the phases. Returns `true` while still animating; once idle
    /// the shown panel is fully visible.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        if !tween.is_finished(now) {
            return true;
        }
        match self.phase {
            SwitchPhase::Exiting => {
                if let Some(next) = self.pending.take() {
                    self.shown = next;
                }
                self.phase = SwitchPhase::Entering;
                self.tween = Some(switch_tween(
                    PanelStyle::hidden(SECTION_SHIFT_PX, SECTION_BLUR_PX),
                    PanelStyle::SHOWN,
                    now,
                ));
                true
            }
            SwitchPhase::Entering | SwitchPhase::Idle => {
                self.phase = SwitchPhase::Idle;
                self.tween = None;
                false
            }
        }
    }
}
