// Scroll/visibility tuning constants shared with the web frontend.

// Scroll behavior
pub const SCROLL_VISIBLE_THRESHOLD: f64 = 900.0; // offset above which the button shows; the boundary itself stays hidden

// DOM wiring
pub const TOP_BUTTON_SELECTOR: &str = ".topBtn"; // first match is the controlled element
pub const VISIBLE_MARKER_CLASS: &str = "top-is-visible"; // styling hook toggled on the button
