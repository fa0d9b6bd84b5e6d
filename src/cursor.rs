use crate::constants::{CURSOR_DOT_CLASS, CURSOR_DOT_HALF, CURSOR_RING_CLASS, CURSOR_RING_HALF};
use crate::dom::{self, MutationWatch, Timeout};
use crate::events::{self, EventListener};
use crate::frame::FrameLoop;
use crate::style;
use bio_core::constants::{CURSOR_BODY_CLASS, MAGNETIC_CLASS};
use bio_core::{
    CursorConfig, CursorMotion, CursorTracker, ElementId, GeometrySource, PointerKind, Rect,
};
use fnv::FnvHashMap;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Live magnetic elements keyed by their stamped identity.
#[derive(Default)]
struct MagnetElements {
    by_id: FnvHashMap<ElementId, web::Element>,
    next_id: u32,
}

impl GeometrySource for MagnetElements {
    fn bounding_rect(&self, id: ElementId) -> Option<Rect> {
        self.by_id.get(&id).and_then(dom::element_rect)
    }
}

struct CursorState {
    tracker: CursorTracker,
    motion: CursorMotion,
    magnets: MagnetElements,
    dot: web::HtmlElement,
    ring: web::HtmlElement,
    last_frame: Instant,
}

impl CursorState {
    fn on_event(&mut self, kind: PointerKind, ev: &web::MouseEvent) -> bool {
        let pos = events::client_pos(ev);
        self.tracker.on_pointer(kind, pos, &self.magnets)
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = if now > self.last_frame {
            now.duration_since(self.last_frame).as_secs_f32()
        } else {
            0.0
        };
        self.last_frame = now;

        let pos = self.tracker.advance();
        let visual = self.motion.update(self.tracker.visual(), now, dt_sec);

        dom::set_style(
            &self.dot,
            "transform",
            &style::cursor_transform(pos, CURSOR_DOT_HALF, visual.dot_scale),
        );
        dom::set_style(&self.dot, "opacity", &style::opacity(visual.dot_opacity));
        dom::set_style(
            &self.ring,
            "transform",
            &style::cursor_transform(pos, CURSOR_RING_HALF, visual.ring_scale),
        );
        dom::set_style(&self.ring, "opacity", &style::opacity(visual.ring_opacity));
    }

    /// Re-query every magnetic element and rebuild the candidate set.
    fn refresh_magnets(&mut self, document: &web::Document) {
        let selector = format!(".{}", MAGNETIC_CLASS);
        let mut by_id = FnvHashMap::default();
        let mut order = Vec::new();
        for el in dom::query_all(document, &selector) {
            let id = dom::stamp_element_id(&el, &mut self.magnets.next_id);
            if by_id.insert(id, el).is_none() {
                order.push(id);
            }
        }
        self.magnets.by_id = by_id;
        _ = self.tracker.refresh_magnets(order);
    }
}

/// Page-wide custom cursor: a dot and a ring following an eased position.
///
/// Everything it registers (listeners, frame loop, observer, timers, body
/// class, indicator elements) is released when it is dropped.
pub struct CustomCursor {
    _listeners: Vec<EventListener>,
    _observer: Option<MutationWatch>,
    _pending_refresh: Rc<RefCell<Option<Timeout>>>,
    _reveal: Option<Timeout>,
    frame: Rc<FrameLoop>,
    state: Rc<RefCell<CursorState>>,
    body: web::HtmlElement,
}

impl CustomCursor {
    pub fn mount(document: &web::Document, cfg: CursorConfig) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;

        let dot = dom::create_div(document, CURSOR_DOT_CLASS)?;
        let ring = dom::create_div(document, CURSOR_RING_CLASS)?;
        for el in [&dot, &ring] {
            dom::set_style(el, "opacity", "0");
            body.append_child(el).map_err(dom::js_err)?;
        }

        let viewport = dom::viewport_size(&window);
        let now = Instant::now();
        let state = Rc::new(RefCell::new(CursorState {
            tracker: CursorTracker::new(viewport, cfg),
            motion: CursorMotion::new(now),
            magnets: MagnetElements::default(),
            dot,
            ring,
            last_frame: now,
        }));
        state.borrow_mut().refresh_magnets(document);
        let cfg = *state.borrow().tracker.config();

        // Per-frame smoothing; runs until unmount once the first event arrives
        let state_tick = state.clone();
        let frame = Rc::new(FrameLoop::new(move |_ts| {
            state_tick.borrow_mut().frame();
            true
        }));

        let mut listeners = Vec::new();
        let window_target: &web::EventTarget = window.as_ref();
        for kind in events::CURSOR_EVENTS {
            listeners.push(EventListener::passive(
                window_target,
                kind,
                pointer_handler(state.clone(), frame.clone()),
            )?);
        }
        if let Some(root) = document.document_element() {
            for kind in events::VIEWPORT_EVENTS {
                listeners.push(EventListener::new(
                    root.as_ref(),
                    kind,
                    pointer_handler(state.clone(), frame.clone()),
                )?);
            }
        }

        // Debounced magnet refresh on structural or class changes
        let pending_refresh: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let observer = {
            let pending = pending_refresh.clone();
            let state_obs = state.clone();
            let window_obs = window.clone();
            let document_obs = document.clone();
            let debounce_ms = cfg.refresh_debounce_ms;
            MutationWatch::new(body.as_ref(), &["class"], move || {
                let state_refresh = state_obs.clone();
                let document_refresh = document_obs.clone();
                // Replacing the pending timeout clears the previous one
                *pending.borrow_mut() = Timeout::new(&window_obs, debounce_ms, move || {
                    state_refresh.borrow_mut().refresh_magnets(&document_refresh);
                })
                .map_err(|e| log::warn!("[magnet] debounce timer failed: {:?}", e))
                .ok();
            })
        };
        let observer = match observer {
            Ok(o) => Some(o),
            Err(e) => {
                log::warn!("[magnet] mutation observer unavailable: {:?}", e);
                None
            }
        };

        let state_reveal = state.clone();
        let reveal = Timeout::new(&window, cfg.reveal_delay_ms, move || {
            state_reveal.borrow_mut().tracker.reveal();
        })
        .map_err(|e| log::warn!("[cursor] reveal timer failed: {:?}", e))
        .ok();
        if reveal.is_none() {
            state.borrow_mut().tracker.reveal();
        }

        _ = body.class_list().add_1(CURSOR_BODY_CLASS);
        log::info!(
            "[cursor] mounted viewport=({:.0},{:.0}) magnets={}",
            viewport.x,
            viewport.y,
            state.borrow().tracker.attractor().candidates().len()
        );

        Ok(Self {
            _listeners: listeners,
            _observer: observer,
            _pending_refresh: pending_refresh,
            _reveal: reveal,
            frame,
            state,
            body,
        })
    }
}

fn pointer_handler(
    state: Rc<RefCell<CursorState>>,
    frame: Rc<FrameLoop>,
) -> impl FnMut(web::Event) + 'static {
    move |ev: web::Event| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let interactive = ev.type_() == "mouseover" && events::is_interactive_target(&ev);
        let Some(kind) = events::pointer_kind(&ev.type_(), interactive) else {
            return;
        };
        let needs_start = state.borrow_mut().on_event(kind, mouse);
        if needs_start && !frame.start() && !frame.is_running() {
            // No frame scheduling: the indicator stays static
            log::warn!("[cursor] frame loop unavailable");
            state.borrow_mut().tracker.stop();
        }
    }
}

impl Drop for CustomCursor {
    fn drop(&mut self) {
        self.frame.stop();
        _ = self.body.class_list().remove_1(CURSOR_BODY_CLASS);
        let st = self.state.borrow();
        st.dot.remove();
        st.ring.remove();
        log::info!("[cursor] unmounted");
    }
}
