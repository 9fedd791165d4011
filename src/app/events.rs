use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use super::mouse_click;
use super::state::App;
use crate::error::RecognitionError;
use crate::voice::VoiceToggle;

impl App {
    /// Dispatch a terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                mouse_click::handle_pointer_down(self, mouse.column, mouse.row);
            }
            Event::Paste(text) => {
                self.textarea.insert_str(text.replace(['\r', '\n'], " "));
                self.input_edited(now);
            }
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key, now) {
            return;
        }
        if self.handle_navigation_keys(key) {
            return;
        }

        // Everything else edits the input line
        if self.textarea.input(key) {
            self.input_edited(now);
        }
    }

    /// Keys that work regardless of the overlay
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Ctrl+C: Exit application
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                true
            }
            // Ctrl+U: Clear query and suggestions
            KeyCode::Char('u') if ctrl => {
                self.replace_input("");
                self.search.clear();
                true
            }
            // Ctrl+T: Next category filter
            KeyCode::Char('t') if ctrl => {
                self.search.cycle_category(now);
                true
            }
            // Ctrl+R: Back to all categories
            KeyCode::Char('r') if ctrl => {
                self.search.clear_category(now);
                true
            }
            KeyCode::F(2) => {
                self.toggle_voice();
                true
            }
            _ => false,
        }
    }

    /// Selection keys: move the highlight, commit, cancel
    fn handle_navigation_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Tab => {
                self.search.advance();
                true
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.search.retreat();
                true
            }
            KeyCode::Enter => {
                if self.search.commit().is_some() {
                    self.follow_pending_route();
                }
                true
            }
            KeyCode::Esc => {
                if self.search.is_overlay_visible() {
                    self.search.cancel();
                } else {
                    self.should_quit = true;
                }
                true
            }
            _ => false,
        }
    }

    fn input_edited(&mut self, now: Instant) {
        let text = self.input_text().to_string();
        self.search.input_changed(&text, now);
    }

    fn toggle_voice(&mut self) {
        match self.search.toggle_voice() {
            VoiceToggle::Started(_) => self.notification.show("Listening..."),
            VoiceToggle::Stopped(_) => self.notification.show("Voice input stopped"),
            VoiceToggle::Unsupported => self
                .notification
                .show_warning(RecognitionError::Unsupported.advisory()),
            VoiceToggle::Failed(error) => self.notification.show_warning(error.advisory()),
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
