//! Input field rendering
//!
//! Draws the text box: border color follows the editing state, the
//! background switches when the field is disabled, and the bottom border
//! carries a character counter.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders},
};

use crate::app::App;

/// Render the input field
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let style = app.style;
    let field = &mut app.field;

    let editing = field.is_editing();
    let disabled = field.is_disabled();

    let border_color = if editing {
        style.editing_border
    } else {
        style.idle_border
    };
    let background = if disabled {
        style.disabled_background
    } else {
        style.background
    };

    let counter = format!(
        " {}/{} ",
        field.engine.char_count(),
        field.engine.options().text_limit
    );

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title_bottom(Line::from(counter).right_aligned());
    if disabled {
        block = block.title(" Disabled ");
    }

    field.textarea.set_block(block);
    field
        .textarea
        .set_style(Style::default().fg(style.foreground).bg(background));
    field
        .textarea
        .set_placeholder_style(Style::default().fg(Color::DarkGray).bg(background));

    // Hide the cursor block when the field is not focused
    let cursor_style = if editing && !disabled {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    field.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&field.textarea, area);
}

#[cfg(test)]
#[path = "field_render_tests.rs"]
mod field_render_tests;
