//! Full-screen rendering tests

use crate::config::Config;
use crate::test_utils::test_helpers::{fruit_app, render_app, test_app, type_text};

#[test]
fn test_idle_screen_shows_field_and_submit_hints() {
    let mut app = fruit_app();
    let output = render_app(&mut app, 60, 10);

    assert!(output.contains("Type to search..."));
    assert!(output.contains("Enter submit"));
    assert!(output.contains("Esc cancel"));
    assert!(app.regions.dropdown.is_none());
}

#[test]
fn test_dropdown_screen_shows_navigation_hints() {
    let mut app = fruit_app();
    type_text(&mut app.field, "ber");
    let output = render_app(&mut app, 60, 10);

    assert!(output.contains("Blueberry"));
    assert!(output.contains("Tab/Enter accept"));
    assert!(output.contains("Esc close"));
}

#[test]
fn test_disabled_screen() {
    let mut config = Config::default();
    config.field.disabled = true;
    let mut app = test_app(&config);
    let output = render_app(&mut app, 60, 10);

    assert!(output.contains("Disabled"));
    assert!(output.contains("Enter submit"));
}

#[test]
fn test_short_terminal_hides_dropdown() {
    let mut app = fruit_app();
    type_text(&mut app.field, "ber");
    render_app(&mut app, 20, 4);
    assert!(app.regions.dropdown.is_none());
}

#[test]
fn test_dropdown_window_shrinks_to_fit_terminal() {
    let mut config = Config::default();
    config.field.min_chars_to_trigger = 0;
    let mut app = test_app(&config);
    type_text(&mut app.field, "a");
    assert_eq!(app.field.suggestions().len(), 7);

    // Eight rows leave three suggestion rows under the field
    render_app(&mut app, 40, 8);
    assert_eq!(app.field.window_rows(), 3);
    assert_eq!(app.regions.dropdown.map(|area| area.height), Some(5));

    for _ in 0..3 {
        app.field.highlight_next();
    }
    let output = render_app(&mut app, 40, 8);

    assert_eq!(app.field.visible_range(), 1..4);
    assert!(output.contains("► Mango"));
    assert!(output.contains("4/7"));
    assert!(!output.contains("Apple"));
}
