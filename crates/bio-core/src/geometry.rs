use glam::Vec2;

/// Stable identity of a host element across refreshes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Axis-aligned bounding box in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rect of the given size centered on `center`.
    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width * 0.5, center.y - height * 0.5, width, height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Detached or display:none elements report a zero box; those are not usable geometry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        let finite = self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        !finite || self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }
}

/// Linear map of `value` from `input` to `output`, clamped to the output range.
///
/// `output` may be descending (e.g. `[20, -20]`) to invert an axis.
#[inline]
pub fn map_range(value: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    let span = input[1] - input[0];
    if span.abs() < f32::EPSILON || !value.is_finite() {
        return output[0];
    }
    let t = ((value - input[0]) / span).clamp(0.0, 1.0);
    output[0] + (output[1] - output[0]) * t
}
