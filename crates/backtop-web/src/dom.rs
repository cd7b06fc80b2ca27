use wasm_bindgen::{closure::Closure, JsCast};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Run `f` once the document's structural content is ready. Documents that
/// have already left the "loading" state run it immediately.
pub fn on_document_ready(mut f: impl FnMut() + 'static) {
    match window_document() {
        Some(doc) if doc.ready_state() == "loading" => {
            let closure = Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);
            let _ = doc.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
        Some(_) => f(),
        None => log::warn!("no document; nothing to wire"),
    }
}

#[inline]
pub fn add_scroll_listener(window: &web::Window, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
