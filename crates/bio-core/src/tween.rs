//! Eased-value animation primitives: cubic-bezier curves, timed tweens and
//! damped springs. All timing is driven by caller-supplied instants so the
//! same code runs under `requestAnimationFrame` and in host tests.

use glam::Vec2;
use instant::Instant;
use std::time::Duration;

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// `ease-out` as defined by CSS.
pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
/// Fast-out settle used for entrance transitions.
pub const EASE_OUT_EXPO: CubicBezier = CubicBezier::new(0.19, 1.0, 0.22, 1.0);
pub const EASE_OUT_QUINT: CubicBezier = CubicBezier::new(0.22, 1.0, 0.36, 1.0);

/// Polynomial coefficients of one bezier axis with endpoints fixed at 0 and 1.
#[inline]
fn axis_coeffs(p1: f32, p2: f32) -> (f32, f32, f32) {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (a, b, c)
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    fn sample_x(&self, t: f32) -> f32 {
        let (a, b, c) = axis_coeffs(self.x1, self.x2);
        ((a * t + b) * t + c) * t
    }

    #[inline]
    fn sample_y(&self, t: f32) -> f32 {
        let (a, b, c) = axis_coeffs(self.y1, self.y2);
        ((a * t + b) * t + c) * t
    }

    #[inline]
    fn slope_x(&self, t: f32) -> f32 {
        let (a, b, c) = axis_coeffs(self.x1, self.x2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Curve parameter whose x equals `x`; Newton first, bisection as fallback.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let err = self.sample_x(t) - x;
            if err.abs() < 1e-6 {
                return t;
            }
            let d = self.slope_x(t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        while lo < hi {
            let v = self.sample_x(t);
            if (v - x).abs() < 1e-6 {
                break;
            }
            if x > v {
                lo = t;
            } else {
                hi = t;
            }
            let next = (lo + hi) * 0.5;
            if (next - t).abs() < 1e-7 {
                break;
            }
            t = next;
        }
        t
    }

    /// Eased progress for linear progress `x` in `[0, 1]`.
    pub fn ease(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.solve_t(x))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    Bezier(CubicBezier),
}

impl Easing {
    #[inline]
    pub fn apply(&self, x: f32) -> f32 {
        match self {
            Easing::Linear => x.clamp(0.0, 1.0),
            Easing::Bezier(b) => b.ease(x),
        }
    }
}

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    fn lerp_to(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

#[inline]
fn elapsed_between(started: Instant, now: Instant) -> Duration {
    if now <= started {
        Duration::ZERO
    } else {
        now.duration_since(started)
    }
}

/// Fixed-duration animation from one value to another.
#[derive(Clone, Copy, Debug)]
pub struct Tween<T: Lerp> {
    pub from: T,
    pub to: T,
    pub duration: Duration,
    pub easing: Easing,
    pub started: Instant,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: Duration, easing: Easing, started: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            started,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = elapsed_between(self.started, now);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now: Instant) -> T {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        self.from.lerp_to(self.to, self.easing.apply(p))
    }

    #[inline]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Restart toward `to` from wherever the tween currently is.
    pub fn retarget(&mut self, to: T, now: Instant) {
        self.from = self.sample(now);
        self.to = to;
        self.started = now;
    }
}

/// Damped spring integrated with semi-implicit Euler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
    pub stiffness: f32,
    pub damping: f32,
}

const SPRING_MAX_SUBSTEP: f32 = 1.0 / 120.0;
const SPRING_MAX_DT: f32 = 1.0 / 15.0;
const SPRING_REST_EPS: f32 = 1e-3;

impl Spring {
    pub fn new(value: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            stiffness,
            damping,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < SPRING_REST_EPS && self.velocity.abs() < SPRING_REST_EPS
    }

    /// Advance by `dt_sec`; long frames are capped and split into substeps.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }
        let mut remaining = dt_sec.clamp(0.0, SPRING_MAX_DT);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_MAX_SUBSTEP);
            let accel = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}
