use bio_core::constants::HOVERABLE_SELECTOR;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Client position of the first active touch point.
#[inline]
pub fn first_touch_pos(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

/// Whether the event target is (inside) a link, button, input, label or an
/// element that opted in with `data-hoverable`.
pub fn is_interactive_target(ev: &web::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(HOVERABLE_SELECTOR).ok().flatten())
        .is_some()
}
