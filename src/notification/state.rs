use std::time::{Duration, Instant};

/// How long a message stays on screen
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an informational message, replacing any current one
    pub fn show(&mut self, message: &str) {
        self.show_at(message, NotificationKind::Info, Instant::now());
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_at(message, NotificationKind::Warning, Instant::now());
    }

    pub fn show_at(&mut self, message: &str, kind: NotificationKind, now: Instant) {
        self.current = Some(Notification {
            message: message.to_string(),
            kind,
            expires_at: now + DEFAULT_DURATION,
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    /// Drop the message once its time is up; returns true if one was removed
    pub fn clear_if_expired(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
