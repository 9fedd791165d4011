//! Tests for mouse click handling

use std::time::Instant;

use super::handle_pointer_down;
use crate::app::App;
use crate::test_utils::test_helpers::{
    FakeWorker, ms, place, render_to_string, test_app, type_text,
};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

/// Suggestions published and drawn; the panel starts on row 4 and each
/// suggestion takes two content rows starting at row 5
fn rendered_app() -> (App, FakeWorker) {
    let (mut app, mut worker, _speech) = test_app();
    let t0 = Instant::now();
    type_text(&mut app, "par", t0);
    app.update(t0 + ms(300));
    let token = worker.sent()[0].token;
    worker.reply(
        token,
        vec![place("Paris"), place("Parma"), place("Paro Valley")],
    );
    app.update(t0 + ms(310));
    render_to_string(&mut app, WIDTH, HEIGHT);
    (app, worker)
}

#[test]
fn test_click_on_suggestion_navigates() {
    let (mut app, _worker) = rendered_app();

    handle_pointer_down(&mut app, 10, 7);

    assert!(app.should_quit());
    assert_eq!(
        app.route_url().as_deref(),
        Some("https://trips.example/details?type=Place&name=Parma")
    );
}

#[test]
fn test_click_on_second_line_of_suggestion_navigates_to_it() {
    let (mut app, _worker) = rendered_app();

    handle_pointer_down(&mut app, 10, 10);

    assert_eq!(
        app.route_url().as_deref(),
        Some("https://trips.example/details?type=Place&name=Paro%20Valley")
    );
}

#[test]
fn test_click_on_input_keeps_panel_open() {
    let (mut app, _worker) = rendered_app();

    handle_pointer_down(&mut app, 5, 2);

    assert!(app.search.is_overlay_visible());
    assert!(!app.should_quit());
}

#[test]
fn test_click_on_panel_border_is_captured() {
    let (mut app, _worker) = rendered_app();

    handle_pointer_down(&mut app, 10, 4);

    assert!(app.search.is_overlay_visible());
    assert!(app.route.is_none());
}

#[test]
fn test_click_outside_dismisses_without_navigating() {
    let (mut app, _worker) = rendered_app();

    handle_pointer_down(&mut app, 40, 20);

    assert!(!app.search.is_overlay_visible());
    assert!(app.route.is_none());
    assert!(!app.should_quit());
}

#[test]
fn test_click_with_panel_closed_passes_through() {
    let (mut app, _worker, _speech) = test_app();
    render_to_string(&mut app, WIDTH, HEIGHT);

    handle_pointer_down(&mut app, 40, 20);

    assert!(!app.should_quit());
    assert!(app.route.is_none());
}
