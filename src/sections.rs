use crate::constants::{ACTIVE_CLASS, HIDDEN_CLASS, LINKS_PANEL_ID, PROFILE_PANEL_ID, SECTION_ATTR};
use crate::dom;
use crate::frame::FrameLoop;
use crate::style;
use bio_core::{PanelStyle, SectionSwitch};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Top-level page sections switched by the tab buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Profile,
    Links,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Profile, Section::Links];

    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim() {
            "profile" => Some(Section::Profile),
            "links" => Some(Section::Links),
            _ => None,
        }
    }

    #[inline]
    pub fn attr(self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Links => "links",
        }
    }

    #[inline]
    fn panel_id(self) -> &'static str {
        match self {
            Section::Profile => PROFILE_PANEL_ID,
            Section::Links => LINKS_PANEL_ID,
        }
    }

    fn panel(self, document: &web::Document) -> Option<web::HtmlElement> {
        document
            .get_element_by_id(self.panel_id())
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    }
}

// Only `display` is touched so the host's own inline styles survive
fn show(panel: &web::HtmlElement, look: &PanelStyle) {
    _ = panel.class_list().remove_1(HIDDEN_CLASS);
    let css = panel.style();
    _ = css.remove_property("display");
    _ = css.set_property("opacity", &style::opacity(look.opacity));
    _ = css.set_property("transform", &style::panel_transform(look));
    _ = css.set_property("filter", &style::panel_filter(look));
}

fn hide(panel: &web::HtmlElement) {
    _ = panel.class_list().add_1(HIDDEN_CLASS);
    _ = panel.style().set_property("display", "none");
}

fn mark_tabs(document: &web::Document, active: Section) {
    for tab in dom::query_all(document, &format!("[{}]", SECTION_ATTR)) {
        let selected = tab
            .get_attribute(SECTION_ATTR)
            .and_then(|v| Section::from_attr(&v))
            == Some(active);
        _ = tab.class_list().toggle_with_force(ACTIVE_CLASS, selected);
        _ = tab.set_attribute("aria-selected", if selected { "true" } else { "false" });
    }
}

struct SwitchState {
    switch: SectionSwitch<Section>,
    document: web::Document,
}

impl SwitchState {
    /// Show the current panel with its animated look; hide the rest.
    fn apply(&self, now: Instant) {
        let shown = self.switch.shown();
        let look = self.switch.style(now);
        for section in Section::ALL {
            if let Some(panel) = section.panel(&self.document) {
                if section == shown {
                    show(&panel, &look);
                } else {
                    hide(&panel);
                }
            }
        }
    }
}

/// Profile/links panels: the shown panel animates out before the selected
/// one animates in.
pub struct SectionSwitcher {
    frame: FrameLoop,
    state: Rc<RefCell<SwitchState>>,
}

impl SectionSwitcher {
    pub fn new(document: &web::Document, initial: Section) -> Self {
        let now = Instant::now();
        let state = Rc::new(RefCell::new(SwitchState {
            switch: SectionSwitch::new(initial, now),
            document: document.clone(),
        }));

        let state_tick = state.clone();
        let frame = FrameLoop::new(move |_ts| {
            let mut st = state_tick.borrow_mut();
            let now = Instant::now();
            let running = st.switch.tick(now);
            st.apply(now);
            running
        });

        mark_tabs(document, initial);
        state.borrow().apply(now);
        let switcher = Self { frame, state };
        switcher.run_or_settle(initial);
        switcher
    }

    pub fn select(&self, section: Section) {
        let needs_frames = {
            let mut st = self.state.borrow_mut();
            mark_tabs(&st.document, section);
            st.switch.select(section, Instant::now())
        };
        if needs_frames {
            self.run_or_settle(section);
        }
        log::debug!("[sections] active={}", section.attr());
    }

    fn run_or_settle(&self, section: Section) {
        if self.frame.start() || self.frame.is_running() {
            return;
        }
        // No frame scheduling: switch without motion
        let mut st = self.state.borrow_mut();
        st.switch = SectionSwitch::settled(section);
        st.apply(Instant::now());
    }
}
