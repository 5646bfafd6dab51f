use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::App;
use crate::field::field_render;
use crate::layout::LayoutRegions;
use crate::suggest::suggest_render;

const FIELD_HEIGHT: u16 = 3;

impl App {
    /// Render the UI and remember where each region landed
    pub fn render(&mut self, frame: &mut Frame) {
        let [field_area, _, hint_area] = Layout::vertical([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.field
            .set_viewport_rows(suggest_render::rows_available(frame.area(), field_area));

        field_render::render_field(self, frame, field_area);
        self.render_hints(frame, hint_area);

        // Drawn last so it overlaps the hint line on short terminals
        let dropdown = suggest_render::render_dropdown(self, frame, field_area);

        self.regions = LayoutRegions {
            field: Some(field_area),
            dropdown,
        };
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let hints: &[(&str, &str)] = if self.field.is_disabled() {
            &[("Enter", "submit"), ("Esc", "cancel")]
        } else if self.field.dropdown_visible() {
            &[("↑↓", "move"), ("Tab/Enter", "accept"), ("Esc", "close")]
        } else {
            &[("Enter", "submit"), ("Esc", "cancel")]
        };

        let mut spans = Vec::new();
        for (i, (keys, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(*keys, Style::default().fg(self.style.highlight)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
