use crate::constants::{
    AVATAR_CARD_ID, FOOTER_ID, GREETING_CHAR_CLASS, GREETING_HIGHLIGHT_CLASS, PROFILE_BIO_ID,
    PROFILE_NAME_ID, SECTION_ATTR, SOCIAL_LINKS_ID, WEBSITE_LINKS_ID,
};
use crate::dom::{self, js_err};
use crate::events::EventListener;
use crate::frame::FrameLoop;
use crate::sections::{Section, SectionSwitcher};
use crate::style;
use crate::tilt::TiltCardView;
use bio_core::constants::MAGNETIC_CLASS;
use bio_core::{footer_text, greeting, PanelTween, Profile, SocialLink, WebsiteLink};
use instant::Instant;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rendered page: owns the avatar card, section switcher and tab listeners.
pub struct Page {
    _avatar: Option<TiltCardView>,
    _tabs: Vec<EventListener>,
    _sections: Rc<SectionSwitcher>,
    _title_entrance: Option<FrameLoop>,
}

fn container(document: &web::Document, id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("[page] missing #{}", id);
    }
    el
}

/// Anchor opening in a new tab, picked up by the cursor magnet.
fn external_link(
    document: &web::Document,
    url: &str,
    class: &str,
) -> anyhow::Result<web::Element> {
    let a = document.create_element("a").map_err(js_err)?;
    a.set_class_name(&format!("{} {}", class, MAGNETIC_CLASS));
    a.set_attribute("href", url.trim()).map_err(js_err)?;
    _ = a.set_attribute("target", "_blank");
    _ = a.set_attribute("rel", "noopener noreferrer");
    Ok(a)
}

fn social_link(document: &web::Document, link: &SocialLink) -> anyhow::Result<web::Element> {
    let a = external_link(document, &link.url, "social-link")?;
    _ = a.set_attribute("aria-label", &link.platform);
    if link.icon.trim().is_empty() {
        a.set_text_content(Some(&link.platform));
    } else {
        a.set_inner_html(&link.icon);
    }
    Ok(a)
}

fn website_link(document: &web::Document, link: &WebsiteLink) -> anyhow::Result<web::Element> {
    let a = external_link(document, &link.url, "website-link")?;
    let title = document.create_element("span").map_err(js_err)?;
    title.set_class_name("website-title");
    title.set_text_content(Some(&link.title));
    a.append_child(&title).map_err(js_err)?;
    if let Some(desc) = link.description.as_deref().filter(|d| !d.trim().is_empty()) {
        let p = document.create_element("span").map_err(js_err)?;
        p.set_class_name("website-description");
        p.set_text_content(Some(desc));
        a.append_child(&p).map_err(js_err)?;
    }
    Ok(a)
}

fn render_greeting(
    document: &web::Document,
    target: &web::Element,
    name: &str,
) -> anyhow::Result<()> {
    target.set_text_content(None);
    _ = target.set_attribute("aria-label", &format!("Hello, I'm {}", name.trim()));
    for glyph in greeting(name) {
        let span = document.create_element("span").map_err(js_err)?;
        if glyph.highlighted {
            span.set_class_name(&format!("{} {}", GREETING_CHAR_CLASS, GREETING_HIGHLIGHT_CLASS));
        } else {
            span.set_class_name(GREETING_CHAR_CLASS);
        }
        _ = span.set_attribute("aria-hidden", "true");
        _ = span.set_attribute("style", &format!("animation-delay:{:.2}s", glyph.delay_sec));
        // keep spaces visible inside inline-block spans
        let text = if glyph.ch == ' ' { '\u{a0}' } else { glyph.ch };
        span.set_text_content(Some(&text.to_string()));
        target.append_child(&span).map_err(js_err)?;
    }
    Ok(())
}

fn apply_theme(document: &web::Document, profile: &Profile) {
    let Some(theme) = profile.theme.as_ref() else {
        return;
    };
    let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    for (name, value) in style::theme_properties(theme) {
        dom::set_style(&root, name, &value);
    }
}

/// Drop the greeting title in from above; the loop ends once it settles.
fn title_entrance(el: web::Element) -> Option<FrameLoop> {
    let el = el.dyn_into::<web::HtmlElement>().ok()?;
    let el_tick = el.clone();
    let tween = PanelTween::drop_in(Instant::now());
    let apply = move |now: Instant| {
        let el = &el_tick;
        let look = tween.sample(now);
        dom::set_style(&el, "opacity", &style::opacity(look.opacity));
        dom::set_style(&el, "transform", &style::panel_transform(&look));
        !tween.is_finished(now)
    };
    apply(Instant::now());
    let frame = FrameLoop::new(move |_ts| apply(Instant::now()));
    if !frame.start() {
        log::warn!("[page] title entrance skipped");
        dom::set_style(&el, "opacity", "1");
        dom::set_style(&el, "transform", "none");
    }
    Some(frame)
}

fn wire_tabs(document: &web::Document, switcher: &Rc<SectionSwitcher>) -> Vec<EventListener> {
    let mut listeners = Vec::new();
    for tab in dom::query_all(document, &format!("[{}]", SECTION_ATTR)) {
        let Some(section) = tab
            .get_attribute(SECTION_ATTR)
            .and_then(|v| Section::from_attr(&v))
        else {
            continue;
        };
        let switcher = switcher.clone();
        match EventListener::new(tab.as_ref(), "click", move |_ev| switcher.select(section)) {
            Ok(l) => listeners.push(l),
            Err(e) => log::warn!("[page] tab listener failed: {:?}", e),
        }
    }
    listeners
}

/// Fill the page containers from `profile`. Missing containers are skipped.
pub fn render(document: &web::Document, profile: &Profile) -> anyhow::Result<Page> {
    apply_theme(document, profile);

    let mut title = None;
    if let Some(el) = container(document, PROFILE_NAME_ID) {
        render_greeting(document, &el, &profile.name)?;
        title = title_entrance(el);
    }
    if let Some(el) = container(document, PROFILE_BIO_ID) {
        el.set_text_content(Some(&profile.bio));
    }
    if let Some(el) = container(document, SOCIAL_LINKS_ID) {
        el.set_text_content(None);
        for link in &profile.social_links {
            el.append_child(&social_link(document, link)?).map_err(js_err)?;
        }
    }
    if let Some(el) = container(document, WEBSITE_LINKS_ID) {
        el.set_text_content(None);
        for link in &profile.website_links {
            el.append_child(&website_link(document, link)?).map_err(js_err)?;
        }
    }
    if let Some(el) = container(document, FOOTER_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&footer_text(&profile.name, year)));
    }

    let avatar = match container(document, AVATAR_CARD_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        Some(el) => {
            el.set_text_content(None);
            Some(TiltCardView::mount(
                document,
                &el,
                &profile.avatar,
                &profile.name,
                profile.effects.tilt,
            )?)
        }
        None => None,
    };

    let switcher = Rc::new(SectionSwitcher::new(document, Section::Profile));
    let tabs = wire_tabs(document, &switcher);

    log::info!(
        "[page] rendered social={} websites={} tabs={}",
        profile.social_links.len(),
        profile.website_links.len(),
        tabs.len()
    );
    Ok(Page {
        _avatar: avatar,
        _tabs: tabs,
        _sections: switcher,
        _title_entrance: title,
    })
}
