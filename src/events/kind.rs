use bio_core::PointerKind;

/// Mouse events the custom cursor listens to on `window`.
pub const CURSOR_EVENTS: [&str; 4] = ["mousemove", "mouseover", "mousedown", "mouseup"];

/// Events on the document root that tell when the pointer leaves/enters the viewport.
pub const VIEWPORT_EVENTS: [&str; 2] = ["mouseleave", "mouseenter"];

/// Touch events that set a tilt card's offset: a resting touch counts as
/// much as a moving one.
pub const CARD_TOUCH_EVENTS: [&str; 2] = ["touchstart", "touchmove"];

/// Events that send a tilt card back to rest.
pub const CARD_RELEASE_EVENTS: [&str; 3] = ["mouseleave", "touchend", "touchcancel"];

/// Map a DOM event type to the tracker's event kind.
#[inline]
pub fn pointer_kind(event_type: &str, interactive: bool) -> Option<PointerKind> {
    match event_type {
        "mousemove" => Some(PointerKind::Move),
        "mouseover" => Some(PointerKind::Over { interactive }),
        "mousedown" => Some(PointerKind::Down),
        "mouseup" => Some(PointerKind::Up),
        "mouseleave" => Some(PointerKind::Leave),
        "mouseenter" => Some(PointerKind::Enter),
        _ => None,
    }
}
