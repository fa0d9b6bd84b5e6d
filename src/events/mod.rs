pub mod kind;
pub mod pointer;

use crate::dom::js_err;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub use kind::{
    pointer_kind, CARD_RELEASE_EVENTS, CARD_TOUCH_EVENTS, CURSOR_EVENTS, VIEWPORT_EVENTS,
};
pub use pointer::{client_pos, first_touch_pos, is_interactive_target};

/// DOM event listener that unregisters itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new<F>(target: &web::EventTarget, kind: &'static str, handler: F) -> anyhow::Result<Self>
    where
        F: FnMut(web::Event) + 'static,
    {
        Self::with_passive(target, kind, false, handler)
    }

    /// Passive listeners promise not to call `preventDefault`, which keeps
    /// scrolling smooth for high-frequency events.
    pub fn passive<F>(
        target: &web::EventTarget,
        kind: &'static str,
        handler: F,
    ) -> anyhow::Result<Self>
    where
        F: FnMut(web::Event) + 'static,
    {
        Self::with_passive(target, kind, true, handler)
    }

    fn with_passive<F>(
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        handler: F,
    ) -> anyhow::Result<Self>
    where
        F: FnMut(web::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}
