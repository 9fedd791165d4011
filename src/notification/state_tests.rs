//! Tests for notification state

use super::*;

#[test]
fn test_show_replaces_current() {
    let mut state = NotificationState::new();
    state.show("first");
    state.show_warning("second");

    let current = state.current().unwrap();
    assert_eq!(current.message, "second");
    assert_eq!(current.kind, NotificationKind::Warning);
}

#[test]
fn test_expires_after_duration() {
    let mut state = NotificationState::new();
    let now = Instant::now();
    state.show_at("No speech detected", NotificationKind::Warning, now);

    assert!(!state.clear_if_expired(now + Duration::from_millis(100)));
    assert_eq!(state.current_message(), Some("No speech detected"));

    assert!(state.clear_if_expired(now + DEFAULT_DURATION));
    assert!(state.current().is_none());
}

#[test]
fn test_clear_if_expired_without_message() {
    let mut state = NotificationState::new();
    assert!(!state.clear_if_expired(Instant::now()));
}

#[test]
fn test_clear() {
    let mut state = NotificationState::new();
    state.show("hello");
    state.clear();
    assert!(state.current_message().is_none());
}
