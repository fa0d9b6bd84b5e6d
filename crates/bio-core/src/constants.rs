// Interaction tuning constants shared by the cursor, magnet and tilt logic.

// Cursor smoothing
pub const CURSOR_SPEED_FACTOR: f32 = 0.2; // fraction of the remaining gap closed per frame
pub const CURSOR_REVEAL_DELAY_MS: i32 = 1000; // keep the cursor hidden right after mount

// Magnetic attraction
pub const MAGNET_RADIUS: f32 = 120.0; // capture radius in CSS px
pub const MAGNET_PULL: f32 = 0.3; // per-frame share of the gap to the center at full strength
pub const MAGNET_REFRESH_DEBOUNCE_MS: i32 = 100;

// Cursor indicator scales: (pressed, hovered, magnetic)
pub const DOT_SCALE_PRESSED: f32 = 0.8;
pub const DOT_SCALE_HOVER: f32 = 1.5;
pub const DOT_SCALE_MAGNETIC: f32 = 1.4;
pub const RING_SCALE_PRESSED: f32 = 0.7;
pub const RING_SCALE_HOVER: f32 = 1.3;
pub const RING_SCALE_MAGNETIC: f32 = 1.2;

// Ring opacity per state
pub const RING_OPACITY_IDLE: f32 = 0.7;
pub const RING_OPACITY_HOVER: f32 = 0.4;
pub const RING_OPACITY_MAGNETIC: f32 = 0.9;
pub const CURSOR_FADE_SEC: f32 = 0.2;

// Scale springs
pub const DOT_SPRING_STIFFNESS: f32 = 300.0;
pub const DOT_SPRING_DAMPING: f32 = 25.0;
pub const RING_SPRING_STIFFNESS: f32 = 150.0;
pub const RING_SPRING_DAMPING: f32 = 15.0;

// Tilt mapping
pub const TILT_INPUT_RANGE: f32 = 300.0; // offset (px) that maps to the full rotation
pub const TILT_MAX_DEG: f32 = 20.0;
pub const TILT_LIGHT_RANGE: f32 = 20.0; // gradient focal point travel (%)
pub const TILT_TOUCH_SCALE: f32 = 0.5;
pub const TILT_RESET_SEC: f32 = 0.5;
pub const TILT_RESET_MAX_SEC: f32 = 10.0; // upper bound for configured resets

// Section switch: the shown panel exits fully before the next one enters
pub const SECTION_SWITCH_SEC: f32 = 0.6;
pub const SECTION_BLUR_SEC: f32 = 0.4;
pub const SECTION_SHIFT_PX: f32 = 20.0;
pub const SECTION_BLUR_PX: f32 = 8.0;
pub const TITLE_ENTER_SEC: f32 = 0.6;

// Derived tilt cues: base + min(cap, rotation * gain)
pub const IMAGE_Z_GAIN: f32 = 0.5;
pub const IMAGE_Z_MAX: f32 = 30.0;
pub const GLOW_BASE: f32 = 0.2;
pub const GLOW_GAIN: f32 = 0.01;
pub const GLOW_MAX: f32 = 0.6;
pub const AMBIENT_BASE: f32 = 0.15;
pub const AMBIENT_GAIN: f32 = 0.008;
pub const AMBIENT_MAX: f32 = 0.35;
pub const EDGE_BASE_PX: f32 = 2.0;
pub const EDGE_GAIN: f32 = 0.25;
pub const EDGE_MAX_PX: f32 = 10.0;

// Host markers
pub const MAGNETIC_CLASS: &str = "magnetic-element";
pub const MAGNET_ID_ATTR: &str = "data-magnet-id";
pub const HOVERABLE_SELECTOR: &str = "a, button, [role=button], input, label, [data-hoverable]";
pub const CURSOR_BODY_CLASS: &str = "custom-cursor";
