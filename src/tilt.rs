use crate::constants::{CARD_GLOW_BLUR_PX, CARD_PERSPECTIVE_PX, GLOW_LAYER_Z_PX, LIGHT_LAYER_Z_PX};
use crate::dom::{self, js_err};
use crate::events::{self, EventListener};
use crate::frame::FrameLoop;
use crate::style;
use bio_core::{TiltCard, TiltConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Layers {
    body: web::HtmlElement,
    light: web::HtmlElement,
    glow: web::HtmlElement,
    image: web::HtmlElement,
    ambient: web::HtmlElement,
}

impl Layers {
    fn build(
        document: &web::Document,
        container: &web::HtmlElement,
        image_src: &str,
        image_alt: &str,
    ) -> anyhow::Result<Self> {
        let body = dom::create_div(document, "tilt-body")?;
        let light = dom::create_div(document, "tilt-light")?;
        let glow = dom::create_div(document, "tilt-glow")?;
        let face = dom::create_div(document, "tilt-face")?;
        let image = dom::create_div(document, "tilt-image")?;
        let ambient = dom::create_div(document, "tilt-ambient")?;

        let img = document.create_element("img").map_err(js_err)?;
        img.set_attribute("src", image_src).map_err(js_err)?;
        img.set_attribute("alt", image_alt).map_err(js_err)?;
        _ = img.set_attribute("draggable", "false");

        dom::set_style(container, "perspective", &format!("{:.0}px", CARD_PERSPECTIVE_PX));
        dom::set_style(&body, "transform-style", "preserve-3d");
        dom::set_style(&image, "transform-style", "preserve-3d");
        dom::set_style(&light, "transform", &style::light_transform(LIGHT_LAYER_Z_PX));
        dom::set_style(&glow, "transform", &style::light_transform(GLOW_LAYER_Z_PX));

        image.append_child(&img).map_err(js_err)?;
        face.append_child(&image).map_err(js_err)?;
        for layer in [&light, &glow, &face, &ambient] {
            body.append_child(layer).map_err(js_err)?;
        }
        container.append_child(&body).map_err(js_err)?;

        Ok(Self {
            body,
            light,
            glow,
            image,
            ambient,
        })
    }

    fn apply(&self, card: &TiltCard) {
        let pose = card.pose();
        dom::set_style(&self.body, "transform", &style::card_transform(&pose));
        dom::set_style(&self.image, "transform", &style::image_transform(&pose));
        dom::set_style(&self.light, "background", &style::light_background(&pose));
        dom::set_style(
            &self.glow,
            "box-shadow",
            &style::glow_shadow(&pose, CARD_GLOW_BLUR_PX),
        );
        dom::set_style(&self.glow, "opacity", &style::opacity(pose.glow_opacity));
        dom::set_style(&self.ambient, "background", &style::ambient_background(&pose));
        dom::set_style(&self.ambient, "opacity", &style::opacity(pose.ambient_opacity));
    }
}

struct TiltState {
    card: TiltCard,
    layers: Layers,
}

/// A card that tilts toward the pointer and eases back to rest on leave.
pub struct TiltCardView {
    _listeners: Vec<EventListener>,
    frame: Rc<FrameLoop>,
    state: Rc<RefCell<TiltState>>,
}

impl TiltCardView {
    pub fn mount(
        document: &web::Document,
        container: &web::HtmlElement,
        image_src: &str,
        image_alt: &str,
        cfg: TiltConfig,
    ) -> anyhow::Result<Self> {
        let layers = Layers::build(document, container, image_src, image_alt)?;
        let card = TiltCard::new(cfg);
        layers.apply(&card);
        let state = Rc::new(RefCell::new(TiltState { card, layers }));

        // Only the reset animation needs frames; moves apply immediately
        let state_tick = state.clone();
        let frame = Rc::new(FrameLoop::new(move |_ts| {
            let mut st = state_tick.borrow_mut();
            let running = st.card.tick(Instant::now());
            st.layers.apply(&st.card);
            running
        }));

        let target: &web::EventTarget = container.as_ref();
        let mut listeners = Vec::with_capacity(6);

        let (state_m, frame_m, el_m) = (state.clone(), frame.clone(), container.clone());
        listeners.push(EventListener::new(target, "mousemove", move |ev| {
            let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let rect = dom::element_rect(&el_m);
            let mut st = state_m.borrow_mut();
            if st.card.pointer_move(events::client_pos(mouse), rect) {
                frame_m.stop();
                st.layers.apply(&st.card);
            }
        })?);

        for kind in events::CARD_TOUCH_EVENTS {
            let (state_t, frame_t, el_t) = (state.clone(), frame.clone(), container.clone());
            listeners.push(EventListener::passive(target, kind, move |ev| {
                let Some(pos) = ev
                    .dyn_ref::<web::TouchEvent>()
                    .and_then(events::first_touch_pos)
                else {
                    return;
                };
                let rect = dom::element_rect(&el_t);
                let mut st = state_t.borrow_mut();
                if st.card.touch_move(pos, rect) {
                    frame_t.stop();
                    st.layers.apply(&st.card);
                }
            })?);
        }

        for kind in events::CARD_RELEASE_EVENTS {
            let (state_l, frame_l) = (state.clone(), frame.clone());
            listeners.push(EventListener::new(target, kind, move |_ev| {
                let resetting = state_l.borrow_mut().card.leave(Instant::now());
                if resetting && !frame_l.start() && !frame_l.is_running() {
                    // Cannot animate: jump straight to rest
                    let mut st = state_l.borrow_mut();
                    st.card = TiltCard::new(*st.card.config());
                    st.layers.apply(&st.card);
                }
            })?);
        }

        Ok(Self {
            _listeners: listeners,
            frame,
            state,
        })
    }
}

impl Drop for TiltCardView {
    fn drop(&mut self) {
        self.frame.stop();
        self.state.borrow().layers.body.remove();
    }
}
