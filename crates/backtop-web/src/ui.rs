use backtop_core::{MarkerEdit, TogglerParams, VisibilityState};
use web_sys as web;

use crate::dom;
use crate::scroll;

/// Everything the scroll handler needs to keep one button's visibility
/// marker in sync with the scroll offset. Owned by the closure the listener
/// wiring moves it into.
pub struct Toggler {
    pub window: web::Window,
    pub document: web::Document,
    pub button: web::Element,
    pub marker: &'static str,
    pub params: TogglerParams,
}

impl Toggler {
    /// Re-derive the marker from the current scroll offset. The class list is
    /// the source of truth for the previous state, so repeated events at the
    /// same offset leave it untouched.
    pub fn on_scroll(&self) {
        let offset = scroll::offset(&self.window, &self.document);
        let cl = self.button.class_list();
        let mut state = VisibilityState::from_marker(cl.contains(self.marker));
        match state.observe(offset, &self.params) {
            Some(MarkerEdit::Add) => {
                _ = cl.add_1(self.marker);
            }
            Some(MarkerEdit::Remove) => {
                _ = cl.remove_1(self.marker);
            }
            None => {}
        }
    }
}

/// Scroll the window back to the origin when the button is clicked.
pub fn wire_scroll_to_top(button: &web::Element, window: web::Window) {
    dom::add_click_listener(button, move || {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    });
}
