//! Reading the vertical scroll offset across host quirks.

use backtop_core::{select_offset, OffsetProbe};
use web_sys as web;

/// Current vertical scroll offset.
///
/// Tries `window.pageYOffset` first, then the document element's scrollTop,
/// then its parent's, then the body's, mirroring what older engines expose.
pub fn offset(window: &web::Window, document: &web::Document) -> f64 {
    let page_y = || window.page_y_offset().ok();
    let root = || {
        document
            .document_element()
            .map(|el| f64::from(el.scroll_top()))
    };
    let root_parent = || {
        document
            .document_element()
            .and_then(|el| el.parent_element())
            .map(|el| f64::from(el.scroll_top()))
    };
    let body = || document.body().map(|b| f64::from(b.scroll_top()));

    let probes: [OffsetProbe<'_>; 4] = [&page_y, &root, &root_parent, &body];
    select_offset(&probes).unwrap_or(0.0)
}
