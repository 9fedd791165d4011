//! Tests for key and mouse event handling

use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;
use crate::search::Category;
use crate::test_utils::test_helpers::{
    FakeWorker, key, key_with_mods, ms, place, render_to_string, test_app, type_text,
};
use crate::voice::VoiceState;

/// Type "par" and publish three suggestions
fn app_with_suggestions(t0: Instant) -> (App, FakeWorker) {
    let (mut app, mut worker, _speech) = test_app();
    type_text(&mut app, "par", t0);
    app.update(t0 + ms(300));
    let token = worker.sent()[0].token;
    worker.reply(
        token,
        vec![place("Paris"), place("Parma"), place("Paro Valley")],
    );
    app.update(t0 + ms(310));
    (app, worker)
}

#[test]
fn test_typing_updates_query() {
    let (mut app, _worker, _speech) = test_app();
    type_text(&mut app, "pokhara", Instant::now());

    assert_eq!(app.input_text(), "pokhara");
    assert_eq!(app.search.query(), "pokhara");
}

#[test]
fn test_down_and_tab_advance_up_and_backtab_retreat() {
    let t0 = Instant::now();
    let (mut app, _worker) = app_with_suggestions(t0);

    app.handle_key_event(key(KeyCode::Down), t0);
    app.handle_key_event(key(KeyCode::Tab), t0);
    assert_eq!(app.search.selected_index(), 1);

    app.handle_key_event(key(KeyCode::Up), t0);
    app.handle_key_event(key(KeyCode::BackTab), t0);
    assert_eq!(app.search.selected_index(), 2);
}

#[test]
fn test_enter_on_highlight_navigates_and_quits() {
    let t0 = Instant::now();
    let (mut app, _worker) = app_with_suggestions(t0);

    app.handle_key_event(key(KeyCode::Down), t0);
    app.handle_key_event(key(KeyCode::Enter), t0);

    assert!(app.should_quit());
    assert_eq!(
        app.route_url().as_deref(),
        Some("https://trips.example/details?type=Place&name=Paris")
    );
    assert_eq!(app.input_text(), "");
}

#[test]
fn test_enter_without_highlight_submits_query() {
    let t0 = Instant::now();
    let (mut app, _worker) = app_with_suggestions(t0);

    app.handle_key_event(key(KeyCode::Enter), t0);

    assert_eq!(
        app.route_url().as_deref(),
        Some("https://trips.example/searchresult?q=par&category=all")
    );
}

#[test]
fn test_enter_on_empty_input_does_nothing() {
    let (mut app, _worker, _speech) = test_app();

    app.handle_key_event(key(KeyCode::Enter), Instant::now());

    assert!(!app.should_quit());
    assert!(app.route.is_none());
}

#[test]
fn test_escape_closes_panel_first_then_quits() {
    let t0 = Instant::now();
    let (mut app, _worker) = app_with_suggestions(t0);
    app.handle_key_event(key(KeyCode::Down), t0);

    app.handle_key_event(key(KeyCode::Esc), t0);
    assert!(!app.search.is_overlay_visible());
    assert_eq!(app.search.selected_index(), -1);
    assert!(!app.should_quit());

    app.handle_key_event(key(KeyCode::Esc), t0);
    assert!(app.should_quit());
    assert!(app.route.is_none());
}

#[test]
fn test_enter_after_escape_submits_query_not_hidden_highlight() {
    let t0 = Instant::now();
    let (mut app, _worker) = app_with_suggestions(t0);

    app.handle_key_event(key(KeyCode::Esc), t0);
    app.handle_key_event(key(KeyCode::Down), t0);
    assert_eq!(app.search.selected_index(), -1);

    app.handle_key_event(key(KeyCode::Enter), t0);

    assert_eq!(
        app.route_url().as_deref(),
        Some("https://trips.example/searchresult?q=par&category=all")
    );
}

#[test]
fn test_ctrl_u_clears_input_and_panel() {
    let t0 = Instant::now();
    let (mut app, _worker) = app_with_suggestions(t0);

    app.handle_key_event(key_with_mods(KeyCode::Char('u'), KeyModifiers::CONTROL), t0);

    assert_eq!(app.input_text(), "");
    assert!(app.search.results().is_empty());
    assert!(!app.search.is_overlay_visible());
}

#[test]
fn test_ctrl_t_cycles_and_ctrl_r_resets_category() {
    let (mut app, _worker, _speech) = test_app();
    let t0 = Instant::now();

    app.handle_key_event(key_with_mods(KeyCode::Char('t'), KeyModifiers::CONTROL), t0);
    app.handle_key_event(key_with_mods(KeyCode::Char('t'), KeyModifiers::CONTROL), t0);
    assert_eq!(app.search.category(), Category::Place);

    app.handle_key_event(key_with_mods(KeyCode::Char('r'), KeyModifiers::CONTROL), t0);
    assert_eq!(app.search.category(), Category::All);
    // Control keys never reach the input
    assert_eq!(app.input_text(), "");
}

#[test]
fn test_ctrl_c_quits() {
    let (mut app, _worker, _speech) = test_app();

    app.handle_key_event(
        key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL),
        Instant::now(),
    );

    assert!(app.should_quit());
}

#[test]
fn test_f2_toggles_voice() {
    let (mut app, _worker, speech) = test_app();
    let t0 = Instant::now();

    app.handle_key_event(key(KeyCode::F(2)), t0);
    assert_eq!(app.search.voice_state(), VoiceState::Listening);
    assert_eq!(app.notification.current_message(), Some("Listening..."));

    app.handle_key_event(key(KeyCode::F(2)), t0);
    assert_eq!(app.search.voice_state(), VoiceState::Idle);
    assert_eq!(speech.log.borrow().starts.len(), 1);
}

#[test]
fn test_voice_transcript_replaces_input() {
    let (mut app, _worker, speech) = test_app();
    let t0 = Instant::now();
    type_text(&mut app, "old", t0);

    app.handle_key_event(key(KeyCode::F(2)), t0);
    speech.emit(
        speech.last_session(),
        crate::voice::SpeechEvent::Result("Chitwan".to_string()),
    );
    app.update(t0 + ms(10));

    assert_eq!(app.input_text(), "Chitwan");
    assert_eq!(app.search.query(), "Chitwan");
}

#[test]
fn test_paste_goes_to_input_on_one_line() {
    let (mut app, _worker, _speech) = test_app();

    app.handle_event(Event::Paste("lake\nside".to_string()), Instant::now());

    assert_eq!(app.input_text(), "lake side");
    assert_eq!(app.search.query(), "lake side");
}

#[test]
fn test_mouse_down_is_routed() {
    let t0 = Instant::now();
    let (mut app, _worker) = app_with_suggestions(t0);
    render_to_string(&mut app, 80, 24);

    app.handle_event(
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 70,
            row: 20,
            modifiers: KeyModifiers::NONE,
        }),
        t0,
    );

    assert!(!app.search.is_overlay_visible());
}

#[test]
fn test_mouse_move_is_ignored() {
    let t0 = Instant::now();
    let (mut app, _worker) = app_with_suggestions(t0);
    render_to_string(&mut app, 80, 24);

    app.handle_event(
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 70,
            row: 20,
            modifiers: KeyModifiers::NONE,
        }),
        t0,
    );

    assert!(app.search.is_overlay_visible());
}
