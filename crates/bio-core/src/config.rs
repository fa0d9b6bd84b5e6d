use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Cursor smoothing and magnet tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CursorConfig {
    pub speed_factor: f32,
    pub magnet_radius: f32,
    pub magnet_pull: f32,
    pub reveal_delay_ms: i32,
    pub refresh_debounce_ms: i32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            speed_factor: CURSOR_SPEED_FACTOR,
            magnet_radius: MAGNET_RADIUS,
            magnet_pull: MAGNET_PULL,
            reveal_delay_ms: CURSOR_REVEAL_DELAY_MS,
            refresh_debounce_ms: MAGNET_REFRESH_DEBOUNCE_MS,
        }
    }
}

/// Tilt mapping and the derived depth/light cues.
///
/// Every derived cue follows `base + min(max, (|rotateX| + |rotateY|) * gain)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TiltConfig {
    pub input_range: f32,
    pub max_deg: f32,
    pub light_range: f32,
    pub touch_scale: f32,
    pub reset_sec: f32,
    pub image_z_gain: f32,
    pub image_z_max: f32,
    pub glow_base: f32,
    pub glow_gain: f32,
    pub glow_max: f32,
    pub ambient_base: f32,
    pub ambient_gain: f32,
    pub ambient_max: f32,
    pub edge_base: f32,
    pub edge_gain: f32,
    pub edge_max: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            input_range: TILT_INPUT_RANGE,
            max_deg: TILT_MAX_DEG,
            light_range: TILT_LIGHT_RANGE,
            touch_scale: TILT_TOUCH_SCALE,
            reset_sec: TILT_RESET_SEC,
            image_z_gain: IMAGE_Z_GAIN,
            image_z_max: IMAGE_Z_MAX,
            glow_base: GLOW_BASE,
            glow_gain: GLOW_GAIN,
            glow_max: GLOW_MAX,
            ambient_base: AMBIENT_BASE,
            ambient_gain: AMBIENT_GAIN,
            ambient_max: AMBIENT_MAX,
            edge_base: EDGE_BASE_PX,
            edge_gain: EDGE_GAIN,
            edge_max: EDGE_MAX_PX,
        }
    }
}

/// All effect tuning, optionally overridden from the profile document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub cursor: CursorConfig,
    pub tilt: TiltConfig,
}

#[inline]
fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

#[inline]
fn non_negative_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

impl CursorConfig {
    /// Replace out-of-range values with defaults. A speed factor above 1
    /// overshoots every frame, so it is capped.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            speed_factor: positive_or(self.speed_factor, d.speed_factor).min(1.0),
            magnet_radius: positive_or(self.magnet_radius, d.magnet_radius),
            magnet_pull: non_negative_or(self.magnet_pull, d.magnet_pull).min(1.0),
            reveal_delay_ms: self.reveal_delay_ms.max(0),
            refresh_debounce_ms: self.refresh_debounce_ms.max(0),
        }
    }
}

impl TiltConfig {
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            input_range: positive_or(self.input_range, d.input_range),
            max_deg: non_negative_or(self.max_deg, d.max_deg),
            light_range: non_negative_or(self.light_range, d.light_range),
            touch_scale: non_negative_or(self.touch_scale, d.touch_scale),
            reset_sec: non_negative_or(self.reset_sec, d.reset_sec).min(TILT_RESET_MAX_SEC),
            image_z_gain: non_negative_or(self.image_z_gain, d.image_z_gain),
            image_z_max: non_negative_or(self.image_z_max, d.image_z_max),
            glow_base: non_negative_or(self.glow_base, d.glow_base),
            glow_gain: non_negative_or(self.glow_gain, d.glow_gain),
            glow_max: non_negative_or(self.glow_max, d.glow_max),
            ambient_base: non_negative_or(self.ambient_base, d.ambient_base),
            ambient_gain: non_negative_or(self.ambient_gain, d.ambient_gain),
            ambient_max: non_negative_or(self.ambient_max, d.ambient_max),
            edge_base: non_negative_or(self.edge_base, d.edge_base),
            edge_gain: non_negative_or(self.edge_gain, d.edge_gain),
            edge_max: non_negative_or(self.edge_max, d.edge_max),
        }
    }
}

impl EffectsConfig {
    pub fn sanitized(self) -> Self {
        Self {
            cursor: self.cursor.sanitized(),
            tilt: self.tilt.sanitized(),
        }
    }
}
