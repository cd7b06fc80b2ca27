//! Scroll-driven visibility state shared with the web frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs so the
//! threshold logic can be exercised on any target. The web frontend feeds
//! them scroll offsets and applies the returned marker edits to the DOM.

use thiserror::Error;

use crate::constants::SCROLL_VISIBLE_THRESHOLD;

/// Edit the frontend must apply to the button's visibility marker after a
/// scroll observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerEdit {
    Add,
    Remove,
}

/// Tuning for a single toggler instance.
#[derive(Clone, Debug)]
pub struct TogglerParams {
    /// Offset separating the hidden regime from the visible one. The marker
    /// appears only strictly above it; at the threshold itself it is absent.
    pub threshold: f64,
}

impl Default for TogglerParams {
    fn default() -> Self {
        Self {
            threshold: SCROLL_VISIBLE_THRESHOLD,
        }
    }
}

/// The controlled element could not be found at initialization.
#[derive(Debug, Error)]
#[error("no element matches {selector:?}")]
pub struct MissingTarget {
    pub selector: String,
}

/// Two-state visibility tracker for one controlled element.
#[derive(Clone, Debug, Default)]
pub struct VisibilityState {
    visible: bool,
}

impl VisibilityState {
    /// Rebuild the tracker from the marker currently present on the element.
    pub fn from_marker(present: bool) -> Self {
        Self { visible: present }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Fold one scroll observation into the state.
    ///
    /// Returns the marker edit the caller must apply, or `None` when the
    /// element is already in the right regime. Repeated calls with the same
    /// offset produce no further edits after the first.
    pub fn observe(&mut self, offset: f64, params: &TogglerParams) -> Option<MarkerEdit> {
        let want = offset > params.threshold;
        if want == self.visible {
            return None;
        }
        self.visible = want;
        let edit = if want {
            MarkerEdit::Add
        } else {
            MarkerEdit::Remove
        };
        log::debug!("visibility marker {:?} at offset {}", edit, offset);
        Some(edit)
    }
}
