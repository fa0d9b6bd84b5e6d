//! Pointer-driven 3D tilt for a single card surface.
//!
//! The card only stores the pointer offset from its center. Rotation, depth,
//! glow, ambient light, edge highlight and light position are all derived
//! from that offset by [`TiltPose::from_offset`], so any offset (including
//! one mid-way through the eased reset) yields a consistent pose.

use crate::config::TiltConfig;
use crate::constants::TILT_RESET_SEC;
use crate::geometry::{map_range, Rect};
use crate::tween::{Easing, Tween, EASE_OUT};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

/// Visual parameters derived from one offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltPose {
    /// Degrees around the horizontal axis, driven by vertical offset.
    pub rotate_x: f32,
    /// Degrees around the vertical axis, driven by horizontal offset.
    pub rotate_y: f32,
    /// Forward protrusion of the image layer in px.
    pub image_z: f32,
    pub glow_opacity: f32,
    pub ambient_opacity: f32,
    /// Spread of the edge highlight in px.
    pub edge_size: f32,
    /// Radial gradient focal point, in percent.
    pub light_x: f32,
    pub light_y: f32,
}

#[inline]
fn capped(base: f32, magnitude: f32, gain: f32, max: f32) -> f32 {
    base + (magnitude * gain).min(max)
}

/// Bounded rotation for an offset. Moving the pointer down tilts the top
/// edge away (negative `rotate_x`); moving it right turns the card toward it.
#[inline]
pub fn rotation_for_offset(offset: Vec2, cfg: &TiltConfig) -> (f32, f32) {
    let input = [-cfg.input_range, cfg.input_range];
    let rotate_x = map_range(offset.y, input, [cfg.max_deg, -cfg.max_deg]);
    let rotate_y = map_range(offset.x, input, [-cfg.max_deg, cfg.max_deg]);
    (rotate_x, rotate_y)
}

impl TiltPose {
    pub fn from_offset(offset: Vec2, cfg: &TiltConfig) -> Self {
        let (rotate_x, rotate_y) = rotation_for_offset(offset, cfg);
        let magnitude = rotate_x.abs() + rotate_y.abs();
        let input = [-cfg.input_range, cfg.input_range];
        let light = [-cfg.light_range, cfg.light_range];
        Self {
            rotate_x,
            rotate_y,
            image_z: capped(0.0, magnitude, cfg.image_z_gain, cfg.image_z_max),
            glow_opacity: capped(cfg.glow_base, magnitude, cfg.glow_gain, cfg.glow_max),
            ambient_opacity: capped(cfg.ambient_base, magnitude, cfg.ambient_gain, cfg.ambient_max),
            edge_size: capped(cfg.edge_base, magnitude, cfg.edge_gain, cfg.edge_max),
            light_x: map_range(offset.x, input, light),
            light_y: map_range(offset.y, input, light),
        }
    }

    #[inline]
    pub fn rest(cfg: &TiltConfig) -> Self {
        Self::from_offset(Vec2::ZERO, cfg)
    }
}

/// Tilt state for one card instance.
#[derive(Clone, Debug)]
pub struct TiltCard {
    cfg: TiltConfig,
    offset: Vec2,
    reset: Option<Tween<Vec2>>,
}

impl Default for TiltCard {
    fn default() -> Self {
        Self::new(TiltConfig::default())
    }
}

impl TiltCard {
    pub fn new(cfg: TiltConfig) -> Self {
        Self {
            cfg: cfg.sanitized(),
            offset: Vec2::ZERO,
            reset: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &TiltConfig {
        &self.cfg
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    #[inline]
    pub fn pose(&self) -> TiltPose {
        TiltPose::from_offset(self.offset, &self.cfg)
    }

    #[inline]
    pub fn is_resetting(&self) -> bool {
        self.reset.is_some()
    }

    /// Follow a pointer inside the card. A missing or collapsed container
    /// leaves the state untouched and returns `false`.
    pub fn pointer_move(&mut self, pointer: Vec2, rect: Option<Rect>) -> bool {
        match rect.filter(|r| !r.is_empty()) {
            Some(r) => {
                self.set_offset(pointer - r.center());
                true
            }
            None => false,
        }
    }

    /// Touch variant: same mapping with the offset damped for small screens.
    pub fn touch_move(&mut self, touch: Vec2, rect: Option<Rect>) -> bool {
        match rect.filter(|r| !r.is_empty()) {
            Some(r) => {
                self.set_offset((touch - r.center()) * self.cfg.touch_scale);
                true
            }
            None => false,
        }
    }

    fn set_offset(&mut self, offset: Vec2) {
        if !offset.is_finite() {
            return;
        }
        self.reset = None;
        self.offset = offset;
    }

    /// Begin easing back to rest. Returns `true` if the caller needs to drive
    /// [`TiltCard::tick`] until it reports completion.
    pub fn leave(&mut self, now: Instant) -> bool {
        if self.reset.is_some() {
            return true;
        }
        if self.offset == Vec2::ZERO {
            return false;
        }
        let duration = Duration::try_from_secs_f32(self.cfg.reset_sec)
            .unwrap_or_else(|_| Duration::from_secs_f32(TILT_RESET_SEC));
        self.reset = Some(Tween::new(
            self.offset,
            Vec2::ZERO,
            duration,
            Easing::Bezier(EASE_OUT),
            now,
        ));
        true
    }

    /// Sample the reset animation. Returns `true` while it is still running;
    /// once finished the offset is exactly zero.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(tween) = self.reset else {
            return false;
        };
        self.offset = tween.sample(now);
        if tween.is_finished(now) {
            self.offset = Vec2::ZERO;
            self.reset = None;
            return false;
        }
        true
    }
}
