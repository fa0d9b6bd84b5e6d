#![cfg(target_arch = "wasm32")]
use bio_core::Profile;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod page;
mod sections;
mod style;
mod tilt;

/// Everything mounted on the page; dropping it detaches all effects.
struct App {
    _page: page::Page,
    _cursor: Option<cursor::CustomCursor>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("bio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Remove the cursor, listeners and running animations from the page.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("bio-web unmounted");
    }
}

async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    JsFuture::from(promise).await.map_err(dom::js_err)?;
    Ok(())
}

fn load_profile(document: &web::Document) -> Profile {
    let Some(json) = document
        .get_element_by_id(constants::PROFILE_DATA_ID)
        .and_then(|el| el.text_content())
        .filter(|s| !s.trim().is_empty())
    else {
        log::info!("[page] no #{}, using sample profile", constants::PROFILE_DATA_ID);
        return Profile::sample();
    };
    match Profile::from_json(&json) {
        Ok(p) => p,
        Err(e) => {
            log::error!("[page] {}; using sample profile", e);
            Profile::sample()
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom_ready(&document).await?;

    // Replace any previous mount first so effects never stack
    unmount();

    let profile = load_profile(&document);
    let page = page::render(&document, &profile)?;

    // Links exist now, so the first magnet query sees them
    let cursor = match cursor::CustomCursor::mount(&document, profile.effects.cursor) {
        Ok(c) => Some(c),
        Err(e) => {
            log::error!("[cursor] mount failed: {:?}", e);
            None
        }
    };

    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            _page: page,
            _cursor: cursor,
        })
    });
    Ok(())
}
