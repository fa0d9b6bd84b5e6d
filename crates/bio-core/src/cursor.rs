use crate::config::CursorConfig;
use crate::constants::*;
use crate::geometry::ElementId;
use crate::magnet::{GeometrySource, MagnetAttractor, MagnetState};
use crate::tween::{Easing, Spring, Tween};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

/// Raw mouse events the tracker reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Move,
    /// `interactive` is whether the hovered target sits inside a link,
    /// button, input, label or an explicitly hoverable element.
    Over { interactive: bool },
    Down,
    Up,
    Leave,
    Enter,
}

/// Target scale/opacity of the dot and ring indicators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorVisual {
    pub dot_scale: f32,
    pub ring_scale: f32,
    pub dot_opacity: f32,
    pub ring_opacity: f32,
}

/// Pressed beats hovered beats magnetic for the indicator scale.
pub fn cursor_visual(pressed: bool, hovered: bool, magnetic: bool, visible: bool) -> CursorVisual {
    let (dot_scale, ring_scale) = if pressed {
        (DOT_SCALE_PRESSED, RING_SCALE_PRESSED)
    } else if hovered {
        (DOT_SCALE_HOVER, RING_SCALE_HOVER)
    } else if magnetic {
        (DOT_SCALE_MAGNETIC, RING_SCALE_MAGNETIC)
    } else {
        (1.0, 1.0)
    };
    let ring_opacity = if !visible {
        0.0
    } else if magnetic {
        RING_OPACITY_MAGNETIC
    } else if hovered {
        RING_OPACITY_HOVER
    } else {
        RING_OPACITY_IDLE
    };
    CursorVisual {
        dot_scale,
        ring_scale,
        dot_opacity: if visible { 1.0 } else { 0.0 },
        ring_opacity,
    }
}

/// Page-wide eased cursor with magnetic attraction.
///
/// One instance exists per mounted custom cursor; the host owns it and calls
/// [`CursorTracker::advance`] from its frame loop.
#[derive(Clone, Debug)]
pub struct CursorTracker {
    cfg: CursorConfig,
    raw: Vec2,
    smoothed: Vec2,
    magnet: MagnetAttractor,
    pressed: bool,
    link_hovered: bool,
    outside: bool,
    revealed: bool,
    running: bool,
}

impl CursorTracker {
    /// Start at the viewport center, hidden until [`CursorTracker::reveal`].
    pub fn new(viewport: Vec2, cfg: CursorConfig) -> Self {
        let cfg = cfg.sanitized();
        let center = viewport * 0.5;
        Self {
            cfg,
            raw: center,
            smoothed: center,
            magnet: MagnetAttractor::new(cfg.magnet_radius, cfg.magnet_pull),
            pressed: false,
            link_hovered: false,
            outside: false,
            revealed: false,
            running: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &CursorConfig {
        &self.cfg
    }

    #[inline]
    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    #[inline]
    pub fn magnet(&self) -> Option<&MagnetState> {
        self.magnet.active()
    }

    #[inline]
    pub fn attractor(&self) -> &MagnetAttractor {
        &self.magnet
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    #[inline]
    pub fn is_link_hovered(&self) -> bool {
        self.link_hovered
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.revealed && !self.outside
    }

    /// Called once the post-mount delay has elapsed.
    #[inline]
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Record a raw event. Returns `true` exactly when the frame loop was idle
    /// and the caller must start it.
    pub fn on_pointer<G>(&mut self, kind: PointerKind, pos: Vec2, geometry: &G) -> bool
    where
        G: GeometrySource,
    {
        if pos.is_finite() {
            self.raw = pos;
            self.magnet.capture(pos, geometry);
        }
        match kind {
            PointerKind::Down => self.pressed = true,
            PointerKind::Up => self.pressed = false,
            PointerKind::Over { interactive } => self.link_hovered = interactive,
            PointerKind::Leave => self.outside = true,
            PointerKind::Enter => self.outside = false,
            PointerKind::Move => {}
        }
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Rebuild the magnetic candidates; see [`MagnetAttractor::refresh`].
    pub fn refresh_magnets<I>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = ElementId>,
    {
        self.magnet.refresh(ids)
    }

    /// Where this frame's step aims: the magnet pull point while captured,
    /// the raw pointer otherwise.
    #[inline]
    pub fn frame_target(&self) -> Vec2 {
        self.magnet.pull_target(self.smoothed).unwrap_or(self.raw)
    }

    /// One frame of smoothing. The target is resolved before the position
    /// moves, so a capture detected this frame applies immediately.
    pub fn advance(&mut self) -> Vec2 {
        match self.magnet.pull_target(self.smoothed) {
            Some(pulled) => self.smoothed = pulled,
            None => self.smoothed += (self.raw - self.smoothed) * self.cfg.speed_factor,
        }
        self.smoothed
    }

    #[inline]
    pub fn visual(&self) -> CursorVisual {
        cursor_visual(
            self.pressed,
            self.link_hovered,
            self.magnet.is_active(),
            self.is_visible(),
        )
    }

    /// Mark the loop idle; the next event restarts it.
    #[inline]
    pub fn stop(&mut self) {
        self.running = false;
    }
}

/// Animated indicator values: springs for scale, short linear fades for opacity.
#[derive(Clone, Debug)]
pub struct CursorMotion {
    dot_scale: Spring,
    ring_scale: Spring,
    dot_opacity: Tween<f32>,
    ring_opacity: Tween<f32>,
}

impl CursorMotion {
    pub fn new(now: Instant) -> Self {
        let fade = Duration::from_secs_f32(CURSOR_FADE_SEC);
        Self {
            dot_scale: Spring::new(1.0, DOT_SPRING_STIFFNESS, DOT_SPRING_DAMPING),
            ring_scale: Spring::new(1.0, RING_SPRING_STIFFNESS, RING_SPRING_DAMPING),
            dot_opacity: Tween::new(0.0, 0.0, fade, Easing::Linear, now),
            ring_opacity: Tween::new(0.0, 0.0, fade, Easing::Linear, now),
        }
    }

    /// Move every channel toward `target` and return the current values.
    pub fn update(&mut self, target: CursorVisual, now: Instant, dt_sec: f32) -> CursorVisual {
        self.dot_scale.set_target(target.dot_scale);
        self.ring_scale.set_target(target.ring_scale);
        if self.dot_opacity.to != target.dot_opacity {
            self.dot_opacity.retarget(target.dot_opacity, now);
        }
        if self.ring_opacity.to != target.ring_opacity {
            self.ring_opacity.retarget(target.ring_opacity, now);
        }
        CursorVisual {
            dot_scale: self.dot_scale.step(dt_sec),
            ring_scale: self.ring_scale.step(dt_sec),
            dot_opacity: self.dot_opacity.sample(now),
            ring_opacity: self.ring_opacity.sample(now),
        }
    }
}
