//! Overlay visibility state
//!
//! The suggestion panel is shown only while suggestions were requested, the
//! input still has focus intent and the host has room for it, and only for a
//! non-empty query. While shown it captures every pointer-down: presses
//! inside the anchor input or the panel are routed to them, anything else
//! dismisses the panel without reaching the view behind it.

use ratatui::layout::{Position, Rect};

/// Lines each suggestion occupies inside the panel
pub const SUGGESTION_LINES: u16 = 2;

/// Named regions used for containment checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRegion {
    Anchor,
    Panel,
}

/// Where a pointer-down ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDisposition {
    /// Panel hidden and press outside the anchor; the view handles it
    PassThrough,
    /// Press on the anchor input
    Anchor,
    /// Press inside the panel; `line` is relative to the panel content
    /// (None on the border)
    Panel { line: Option<u16> },
    /// Press outside both regions while shown; the panel was dismissed
    Dismissed,
}

#[derive(Debug, Clone)]
pub struct OverlayManager {
    show_suggestions: bool,
    focus_intent: bool,
    host_allows: bool,
    anchor: Option<Rect>,
    panel: Option<Rect>,
}

impl Default for OverlayManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayManager {
    pub fn new() -> Self {
        Self {
            show_suggestions: false,
            focus_intent: true,
            host_allows: true,
            anchor: None,
            panel: None,
        }
    }

    /// Visibility predicate for the given query
    pub fn is_visible(&self, query: &str) -> bool {
        self.show_suggestions && self.focus_intent && self.host_allows && !query.trim().is_empty()
    }

    /// Request the panel (results published, voice transcript arrived)
    pub fn open(&mut self) {
        self.show_suggestions = true;
        self.focus_intent = true;
    }

    /// Hide the panel until the next `open`
    pub fn dismiss(&mut self) {
        self.show_suggestions = false;
    }

    pub fn is_requested(&self) -> bool {
        self.show_suggestions
    }

    pub fn request_focus(&mut self) {
        self.focus_intent = true;
    }

    pub fn release_focus(&mut self) {
        self.focus_intent = false;
    }

    pub fn has_focus_intent(&self) -> bool {
        self.focus_intent
    }

    pub fn set_host_allows(&mut self, allows: bool) {
        self.host_allows = allows;
    }

    pub fn host_allows(&self) -> bool {
        self.host_allows
    }

    /// Record where the anchor input was drawn
    pub fn set_anchor(&mut self, area: Rect) {
        self.anchor = Some(area);
    }

    /// Record where the panel was drawn (None when not drawn)
    pub fn set_panel(&mut self, area: Option<Rect>) {
        self.panel = area;
    }

    pub fn region(&self, region: OverlayRegion) -> Option<Rect> {
        match region {
            OverlayRegion::Anchor => self.anchor,
            OverlayRegion::Panel => self.panel,
        }
    }

    /// Containment check against a named region
    pub fn contains(&self, region: OverlayRegion, column: u16, row: u16) -> bool {
        self.region(region)
            .is_some_and(|r| r.contains(Position::new(column, row)))
    }

    /// Route a pointer-down at (column, row)
    pub fn pointer_down(&mut self, column: u16, row: u16, query: &str) -> PointerDisposition {
        if self.contains(OverlayRegion::Anchor, column, row) {
            self.focus_intent = true;
            return PointerDisposition::Anchor;
        }

        if !self.is_visible(query) {
            return PointerDisposition::PassThrough;
        }

        if let Some(panel) = self.panel.filter(|p| p.contains(Position::new(column, row))) {
            return PointerDisposition::Panel {
                line: content_line(panel, row),
            };
        }

        self.dismiss();
        PointerDisposition::Dismissed
    }
}

/// Row relative to the bordered panel's content area
fn content_line(panel: Rect, row: u16) -> Option<u16> {
    let top = panel.y.saturating_add(1);
    let bottom = panel.y.saturating_add(panel.height.saturating_sub(1));
    (row >= top && row < bottom).then(|| row - top)
}

#[cfg(test)]
#[path = "overlay_state_tests.rs"]
mod overlay_state_tests;
