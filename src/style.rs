// CSS value builders for the cursor and tilt layers. Pure string formatting
// so it can be exercised on the host.

use bio_core::{PanelStyle, Theme, TiltPose};
use glam::Vec2;

/// Position an indicator of half-size `half` centered on `pos`.
#[inline]
pub fn cursor_transform(pos: Vec2, half: f32, scale: f32) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) scale({:.3})",
        pos.x - half,
        pos.y - half,
        scale
    )
}

#[inline]
pub fn card_transform(pose: &TiltPose) -> String {
    format!(
        "rotateX({:.2}deg) rotateY({:.2}deg)",
        pose.rotate_x, pose.rotate_y
    )
}

#[inline]
pub fn image_transform(pose: &TiltPose) -> String {
    format!("translateZ({:.2}px)", pose.image_z)
}

/// Light layer sits behind the card, slightly rotated and shrunk.
#[inline]
pub fn light_transform(z_px: f32) -> String {
    format!("translateZ({:.0}px) rotate(-6deg) scale(0.95)", z_px)
}

/// Radial gradient whose focal point follows the pointer around the center.
pub fn light_background(pose: &TiltPose) -> String {
    format!(
        "radial-gradient(circle at {:.2}% {:.2}%, var(--theme-primary) 0%, var(--theme-secondary) 80%)",
        50.0 + pose.light_x,
        50.0 + pose.light_y
    )
}

#[inline]
pub fn glow_shadow(pose: &TiltPose, blur_px: f32) -> String {
    format!(
        "0 0 {:.0}px {:.2}px var(--theme-primary)",
        blur_px, pose.edge_size
    )
}

/// White sheen opposite the light focal point.
pub fn ambient_background(pose: &TiltPose) -> String {
    format!(
        "linear-gradient({:.1}deg, rgba(255, 255, 255, 0.6) 0%, rgba(255, 255, 255, 0) 60%)",
        135.0 + pose.rotate_y * 2.0 - pose.rotate_x * 2.0
    )
}

#[inline]
pub fn panel_transform(style: &PanelStyle) -> String {
    format!("translateY({:.2}px)", style.offset_y)
}

#[inline]
pub fn panel_filter(style: &PanelStyle) -> String {
    format!("blur({:.2}px)", style.blur_px.max(0.0))
}

#[inline]
pub fn opacity(value: f32) -> String {
    format!("{:.3}", value.clamp(0.0, 1.0))
}

/// CSS custom properties carrying the theme accents.
pub fn theme_properties(theme: &Theme) -> [(&'static str, String); 2] {
    [
        ("--theme-primary", theme.primary.trim().to_string()),
        ("--theme-secondary", theme.secondary.trim().to_string()),
    ]
}
