use bio_core::constants::MAGNET_ID_ATTR;
use bio_core::{ElementId, Rect};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

/// Bounding box of a live element; detached elements have no geometry.
pub fn element_rect(el: &web::Element) -> Option<Rect> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    let rect = Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    );
    (!rect.is_empty()).then_some(rect)
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document.create_element("div").map_err(js_err)?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>().map_err(|e| js_err(e.into()))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Identity of `el`, stamping a fresh one from `next_id` on first sight.
pub fn stamp_element_id(el: &web::Element, next_id: &mut u32) -> ElementId {
    if let Some(id) = el
        .get_attribute(MAGNET_ID_ATTR)
        .and_then(|v| v.parse::<u32>().ok())
    {
        return ElementId(id);
    }
    let id = *next_id;
    *next_id = next_id.wrapping_add(1);
    _ = el.set_attribute(MAGNET_ID_ATTR, &id.to_string());
    ElementId(id)
}

/// Pending `setTimeout`; cleared when dropped.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(
        window: &web::Window,
        delay_ms: i32,
        f: impl FnOnce() + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::once(f);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms,
            )
            .map_err(js_err)?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}

/// `MutationObserver` on a subtree: child list changes plus the listed
/// attributes. Disconnected when dropped.
pub struct MutationWatch {
    observer: web::MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::MutationObserver)>,
}

impl MutationWatch {
    pub fn new(
        target: &web::Node,
        attribute_filter: &[&str],
        mut on_change: impl FnMut() + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(
            move |_records: js_sys::Array, _obs: web::MutationObserver| {
                on_change();
            },
        ) as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);
        let observer =
            web::MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(js_err)?;

        let init = web::MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        if !attribute_filter.is_empty() {
            let filter = js_sys::Array::new();
            for name in attribute_filter {
                filter.push(&JsValue::from_str(name));
            }
            init.set_attributes(true);
            init.set_attribute_filter(&filter);
        }
        observer.observe_with_options(target, &init).map_err(js_err)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for MutationWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
