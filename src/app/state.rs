use std::time::{Duration, Instant};

use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::navigation::{PendingRoute, Route};
use crate::notification::NotificationState;
use crate::search_box::{SearchBox, SearchBoxEvent};

/// Terminal client state
pub struct App {
    pub textarea: TextArea<'static>,
    pub search: SearchBox<PendingRoute>,
    pub notification: NotificationState,
    /// Prefix used when printing the chosen route
    pub base_url: String,
    pub should_quit: bool,
    /// Route requested by the last commit; ends the session
    pub route: Option<Route>,
}

impl App {
    pub fn new(search: SearchBox<PendingRoute>, base_url: impl Into<String>) -> Self {
        let mut textarea = TextArea::default();
        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Search places, hotels, restaurants...");

        Self {
            textarea,
            search,
            notification: NotificationState::new(),
            base_url: base_url.into(),
            should_quit: false,
            route: None,
        }
    }

    /// Pre-fill the input (e.g. from the command line) and schedule a search
    pub fn with_query(mut self, query: &str, now: Instant) -> Self {
        self.replace_input(query);
        self.search.input_changed(query, now);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current text of the input line
    pub fn input_text(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// URL of the route the user committed to, if any
    pub fn route_url(&self) -> Option<String> {
        self.route.as_ref().map(|r| r.to_url(&self.base_url))
    }

    /// Overwrite the input line without going through key handling
    pub fn replace_input(&mut self, text: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(text);
    }

    /// How long the event loop may block waiting for input
    ///
    /// Never longer than `max`, and shorter when a debounced search falls
    /// due sooner.
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        self.search
            .time_until_search(now)
            .map_or(max, |remaining| remaining.min(max))
    }

    /// Advance timers and drain background results; called every loop
    pub fn update(&mut self, now: Instant) {
        self.search.tick(now);

        for event in self.search.poll(now) {
            match event {
                SearchBoxEvent::InputReplaced(text) => self.replace_input(&text),
                SearchBoxEvent::Notice(message) => self.notification.show_warning(&message),
            }
        }

        self.notification.clear_if_expired(now);
    }

    /// Follow a route the search box requested, ending the session
    pub(super) fn follow_pending_route(&mut self) {
        let Some(route) = self.search.router_mut().take() else {
            return;
        };
        log::debug!("Leaving for {}", route);
        self.replace_input("");
        self.search.route_changed();
        self.route = Some(route);
        self.should_quit = true;
    }
}
