//! Suggestion dropdown rendering
//!
//! This module handles rendering of the dropdown shown under the field.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::widgets::popup;

// Dropdown display constants
const MIN_POPUP_TEXT_WIDTH: usize = 16;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 0;

/// Render the dropdown below the input field.
///
/// Returns the area drawn, or `None` when there is nothing to show.
pub fn render_dropdown(app: &App, frame: &mut Frame, field_area: Rect) -> Option<Rect> {
    let suggestions = app.field.suggestions();
    if suggestions.is_empty() {
        return None;
    }

    let visible = app.field.visible_range();
    let popup_height = u16::try_from(visible.len())
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_BORDER_HEIGHT);

    let max_text_width = suggestions
        .iter()
        .map(|s| s.width())
        .max()
        .unwrap_or(0)
        .max(MIN_POPUP_TEXT_WIDTH);
    let max_text_width = u16::try_from(max_text_width).unwrap_or(u16::MAX);
    let popup_width = max_text_width
        .saturating_add(POPUP_PADDING)
        .min(field_area.width);

    let popup_area = popup::popup_below_anchor(
        field_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let style = &app.style;
    let items: Vec<ListItem> = suggestions[visible.clone()]
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let line = if visible.start + i == app.field.highlighted {
                Line::from(Span::styled(
                    format!("► {}", suggestion),
                    Style::default()
                        .fg(Color::Black)
                        .bg(style.highlight)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", suggestion),
                    Style::default().fg(style.foreground),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    // Position indicator once the list no longer fits
    let title = if suggestions.len() > visible.len() {
        format!(" {}/{} ", app.field.highlighted + 1, suggestions.len())
    } else {
        " Suggestions ".to_string()
    };

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(style.highlight))
            .style(Style::default().bg(style.background)),
    );

    frame.render_widget(list, popup_area);
    Some(popup_area)
}

/// Dropdown rows that fit between the bottom of the field and the bottom of
/// the frame, borders excluded
pub fn rows_available(frame_area: Rect, field_area: Rect) -> usize {
    frame_area
        .bottom()
        .saturating_sub(field_area.bottom())
        .saturating_sub(POPUP_BORDER_HEIGHT) as usize
}

/// Index into the visible window for a screen row inside the dropdown
pub fn dropdown_row_at(dropdown_area: Rect, row: u16) -> Option<usize> {
    let first_row = dropdown_area.y + 1;
    let last_row = dropdown_area.bottom().saturating_sub(1);
    if row < first_row || row >= last_row {
        return None;
    }
    Some((row - first_row) as usize)
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
