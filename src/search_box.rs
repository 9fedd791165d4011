//! Type-ahead search box
//!
//! Composes the query controller, selection state, overlay, voice input and
//! navigation dispatcher into the one component a host drives. The host
//! forwards input edits, navigation keys, pointer-downs and route changes,
//! calls `tick`/`poll` from its event loop and renders from the accessors.

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::SearchError;
use crate::navigation::{NavigationDispatcher, Route, Router};
use crate::overlay::{OverlayManager, PointerDisposition, SUGGESTION_LINES};
use crate::search::{Category, QueryController, RankedResult, RequestToken, ResponseDisposition};
use crate::selection::{CommitTarget, SelectionState};
use crate::voice::{VoiceInput, VoiceOutcome, VoiceState, VoiceToggle};

/// Something the host has to react to after `poll`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchBoxEvent {
    /// The query was replaced from outside the editor (voice transcript)
    InputReplaced(String),
    /// Short advisory for the user (search failure, recognition error)
    Notice(String),
}

/// What a pointer-down did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Not ours; the view behind the overlay handles it
    PassThrough,
    /// Swallowed by the overlay (anchor press, panel border, dismissal)
    Captured,
    /// A suggestion was clicked and navigation requested
    Navigated(Route),
}

pub struct SearchBox<R: Router> {
    controller: QueryController,
    selection: SelectionState,
    overlay: OverlayManager,
    voice: VoiceInput,
    navigation: NavigationDispatcher<R>,
}

impl<R: Router> SearchBox<R> {
    pub fn new(controller: QueryController, voice: VoiceInput, router: R) -> Self {
        Self {
            controller,
            selection: SelectionState::new(),
            overlay: OverlayManager::new(),
            voice,
            navigation: NavigationDispatcher::new(router),
        }
    }

    pub fn from_config(config: &Config, voice: VoiceInput, router: R) -> Self {
        Self::new(QueryController::from_config(&config.search), voice, router)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn controller(&self) -> &QueryController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut QueryController {
        &mut self.controller
    }

    pub fn query(&self) -> &str {
        self.controller.query()
    }

    pub fn category(&self) -> Category {
        self.controller.category()
    }

    pub fn results(&self) -> &[RankedResult] {
        self.controller.results()
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    /// True once a search has completed for the current session
    pub fn has_searched(&self) -> bool {
        self.controller.has_searched()
    }

    pub fn last_error(&self) -> Option<&SearchError> {
        self.controller.last_error()
    }

    /// Highlighted suggestion, -1 when none
    pub fn selected_index(&self) -> isize {
        self.selection.index()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn overlay(&self) -> &OverlayManager {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut OverlayManager {
        &mut self.overlay
    }

    pub fn is_overlay_visible(&self) -> bool {
        self.overlay.is_visible(self.controller.query())
    }

    pub fn voice_supported(&self) -> bool {
        self.voice.is_supported()
    }

    pub fn voice_state(&self) -> VoiceState {
        self.voice.state()
    }

    pub fn router(&self) -> &R {
        self.navigation.router()
    }

    pub fn router_mut(&mut self) -> &mut R {
        self.navigation.router_mut()
    }

    // =========================================================================
    // Query input
    // =========================================================================

    /// The anchor input's text changed
    pub fn input_changed(&mut self, text: &str, now: Instant) {
        self.overlay.request_focus();
        self.selection.reset();
        if self.controller.set_query(text, now) {
            self.overlay.dismiss();
        }
    }

    pub fn set_category(&mut self, category: Category, now: Instant) {
        self.selection.reset();
        self.controller.set_category(category, now);
    }

    pub fn cycle_category(&mut self, now: Instant) {
        let next = self.controller.category().next();
        self.set_category(next, now);
    }

    pub fn clear_category(&mut self, now: Instant) {
        self.selection.reset();
        self.controller.clear_category(now);
    }

    /// Explicit clear action
    pub fn clear(&mut self) {
        self.reset_session();
    }

    /// The host navigated elsewhere
    pub fn route_changed(&mut self) {
        self.reset_session();
    }

    fn reset_session(&mut self) {
        self.controller.reset();
        self.selection.reset();
        self.overlay.dismiss();
    }

    // =========================================================================
    // Event loop
    // =========================================================================

    /// How long until the debounced search is due, if one is pending
    pub fn time_until_search(&self, now: Instant) -> Option<Duration> {
        self.controller.time_until_search(now)
    }

    /// Fire the debounced search if due
    pub fn tick(&mut self, now: Instant) -> Option<RequestToken> {
        self.controller.tick(now)
    }

    /// Apply search responses and voice events that arrived since last poll
    pub fn poll(&mut self, now: Instant) -> Vec<SearchBoxEvent> {
        let mut events = Vec::new();

        for disposition in self.controller.poll_responses() {
            match disposition {
                ResponseDisposition::Published(count) => {
                    log::debug!("Published {} suggestions", count);
                    self.selection.reset();
                    self.overlay.open();
                }
                ResponseDisposition::Failed(error) => {
                    self.selection.reset();
                    self.overlay.dismiss();
                    events.push(SearchBoxEvent::Notice(error.to_string()));
                }
                ResponseDisposition::Stale => {}
            }
        }

        for outcome in self.voice.poll() {
            match outcome {
                VoiceOutcome::Transcript(text) => {
                    self.input_changed(&text, now);
                    self.overlay.open();
                    events.push(SearchBoxEvent::InputReplaced(self.controller.query().to_string()));
                }
                VoiceOutcome::Failed(error) => {
                    events.push(SearchBoxEvent::Notice(error.advisory().to_string()));
                }
                VoiceOutcome::Ended => {}
            }
        }

        events
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Suggestions the highlight may move over; none while the panel is hidden
    fn selectable_count(&self) -> usize {
        if self.is_overlay_visible() {
            self.controller.results().len()
        } else {
            0
        }
    }

    pub fn advance(&mut self) {
        let count = self.selectable_count();
        self.selection.advance(count);
    }

    pub fn retreat(&mut self) {
        let count = self.selectable_count();
        self.selection.retreat(count);
    }

    /// Navigate to the highlighted suggestion, or submit the raw query
    ///
    /// With the panel hidden the raw query is always the target.
    pub fn commit(&mut self) -> Option<Route> {
        let count = self.selectable_count();
        let results = self.controller.results();
        let route = match self.selection.commit_target(count) {
            CommitTarget::Item(index) => {
                let item = results[index].item.clone();
                Some(self.navigation.select(&item))
            }
            CommitTarget::RawQuery => {
                let query = self.controller.query().to_string();
                self.navigation.submit(&query, self.controller.category())
            }
        };

        if route.is_some() {
            self.reset_session();
        }
        route
    }

    /// Escape: drop the highlight, close the panel and let go of focus
    pub fn cancel(&mut self) {
        self.selection.reset();
        self.overlay.dismiss();
        self.overlay.release_focus();
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    pub fn pointer_down(&mut self, column: u16, row: u16) -> PointerOutcome {
        let query = self.controller.query().to_string();
        match self.overlay.pointer_down(column, row, &query) {
            PointerDisposition::PassThrough => PointerOutcome::PassThrough,
            PointerDisposition::Anchor | PointerDisposition::Panel { line: None } => {
                PointerOutcome::Captured
            }
            PointerDisposition::Dismissed => {
                self.selection.reset();
                PointerOutcome::Captured
            }
            PointerDisposition::Panel { line: Some(line) } => {
                let index = usize::from(line / SUGGESTION_LINES);
                let count = self.controller.results().len();
                if index >= count {
                    return PointerOutcome::Captured;
                }
                self.selection.select_index(index, count);
                match self.commit() {
                    Some(route) => PointerOutcome::Navigated(route),
                    None => PointerOutcome::Captured,
                }
            }
        }
    }

    // =========================================================================
    // Voice
    // =========================================================================

    /// Start or stop listening
    pub fn toggle_voice(&mut self) -> VoiceToggle {
        self.voice.toggle()
    }
}

#[cfg(test)]
#[path = "search_box_tests.rs"]
mod search_box_tests;
