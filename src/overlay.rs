//! Suggestion panel visibility and dismissal

mod overlay_state;

pub use overlay_state::{OverlayManager, OverlayRegion, PointerDisposition, SUGGESTION_LINES};
