// DOM hooks and presentation constants used by the web frontend.

// Page shell
pub const PROFILE_DATA_ID: &str = "profile-data"; // <script type="application/json">
pub const PROFILE_PANEL_ID: &str = "profile-panel";
pub const LINKS_PANEL_ID: &str = "links-panel";
pub const AVATAR_CARD_ID: &str = "avatar-card";
// Greeting title. Each character is a `GREETING_CHAR_CLASS` span with a
// staggered inline `animation-delay`; the host stylesheet must give that class
// an `animation` (the page bounce keyframes), otherwise the stagger is inert.
pub const PROFILE_NAME_ID: &str = "profile-name";
pub const GREETING_CHAR_CLASS: &str = "greeting-char";
pub const GREETING_HIGHLIGHT_CLASS: &str = "highlight"; // name characters, accent color
pub const PROFILE_BIO_ID: &str = "profile-bio";
pub const SOCIAL_LINKS_ID: &str = "social-links";
pub const WEBSITE_LINKS_ID: &str = "website-links";
pub const FOOTER_ID: &str = "site-footer";
pub const SECTION_ATTR: &str = "data-section"; // tab buttons: data-section="profile" | "links"

pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";

// Cursor indicators; the half sizes center the element on the pointer
pub const CURSOR_DOT_CLASS: &str = "cursor-dot";
pub const CURSOR_RING_CLASS: &str = "cursor-ring";
pub const CURSOR_DOT_HALF: f32 = 4.0;
pub const CURSOR_RING_HALF: f32 = 16.0;

// Tilt card
pub const CARD_PERSPECTIVE_PX: f32 = 1200.0;
pub const CARD_GLOW_BLUR_PX: f32 = 30.0;
pub const LIGHT_LAYER_Z_PX: f32 = -10.0;
pub const GLOW_LAYER_Z_PX: f32 = -5.0;
