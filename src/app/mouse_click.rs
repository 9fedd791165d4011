//! Mouse click handling
//!
//! Left-button presses go through the search box's overlay first. While the
//! suggestion panel is open it captures every press; a press on a suggestion
//! row navigates to that suggestion.

use super::state::App;
use crate::search_box::PointerOutcome;

/// Handle a left-button press at (column, row)
pub fn handle_pointer_down(app: &mut App, column: u16, row: u16) {
    match app.search.pointer_down(column, row) {
        PointerOutcome::Navigated(_) => app.follow_pending_route(),
        PointerOutcome::Captured => {}
        // Nothing else on screen reacts to clicks
        PointerOutcome::PassThrough => {}
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
