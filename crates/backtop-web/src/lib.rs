#![cfg(target_arch = "wasm32")]
mod dom;
mod scroll;
mod ui;

use backtop_core::{MissingTarget, TogglerParams, TOP_BUTTON_SELECTOR, VISIBLE_MARKER_CLASS};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backtop-web starting");

    dom::on_document_ready(|| {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let button = document
        .query_selector(TOP_BUTTON_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| MissingTarget {
            selector: TOP_BUTTON_SELECTOR.to_string(),
        })?;

    ui::wire_scroll_to_top(&button, window.clone());

    let toggler = ui::Toggler {
        window: window.clone(),
        document,
        button,
        marker: VISIBLE_MARKER_CLASS,
        params: TogglerParams::default(),
    };
    // The listener stays attached for the page's lifetime.
    dom::add_scroll_listener(&window, move || toggler.on_scroll());
    Ok(())
}
