//! Mouse handling tests

use ratatui::crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::test_utils::test_helpers::{fruit_app, render_app, type_text};

const WIDTH: u16 = 40;
const HEIGHT: u16 = 12;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

fn left_click(app: &mut App, column: u16, row: u16) {
    app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
}

fn app_with_dropdown() -> App {
    let mut app = fruit_app();
    type_text(&mut app.field, "ber");
    render_app(&mut app, WIDTH, HEIGHT);
    app
}

#[test]
fn test_render_records_regions() {
    let app = app_with_dropdown();
    assert_eq!(app.regions.field.unwrap().y, 0);
    let dropdown = app.regions.dropdown.unwrap();
    assert_eq!(dropdown.y, 3);
    assert_eq!(dropdown.height, 4);
}

#[test]
fn test_click_on_row_selects_suggestion() {
    let mut app = app_with_dropdown();

    // Row 4 is Blueberry, row 5 is Strawberry
    left_click(&mut app, 3, 5);

    assert_eq!(app.field.text(), "Strawberry");
    assert_eq!(app.field.editor_text(), "Strawberry");
    assert!(!app.field.is_editing());
    assert!(!app.field.has_suggestions());
}

#[test]
fn test_click_on_dropdown_border_does_nothing() {
    let mut app = app_with_dropdown();
    left_click(&mut app, 3, 3);

    assert_eq!(app.field.text(), "ber");
    assert!(app.field.has_suggestions());
}

#[test]
fn test_click_outside_ends_editing() {
    let mut app = app_with_dropdown();
    left_click(&mut app, 35, 9);

    assert!(!app.field.is_editing());
    assert!(!app.field.has_suggestions());
    assert_eq!(app.field.text(), "ber");
}

#[test]
fn test_click_on_field_begins_editing() {
    let mut app = fruit_app();
    render_app(&mut app, WIDTH, HEIGHT);
    assert!(!app.field.is_editing());

    left_click(&mut app, 5, 1);
    assert!(app.field.is_editing());
}

#[test]
fn test_scroll_wheel_moves_highlight() {
    let mut app = app_with_dropdown();

    app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 3, 4));
    assert_eq!(app.field.highlighted_suggestion(), Some("Strawberry"));

    app.handle_mouse_event(mouse(MouseEventKind::ScrollUp, 3, 4));
    assert_eq!(app.field.highlighted_suggestion(), Some("Blueberry"));
}

#[test]
fn test_scroll_outside_dropdown_is_ignored() {
    let mut app = app_with_dropdown();
    app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 35, 9));
    assert_eq!(app.field.highlighted_suggestion(), Some("Blueberry"));
}
