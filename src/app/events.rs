use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

use super::state::App;

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Paste(text) => {
                self.field.insert_paste(&text);
            }
            Event::Mouse(mouse_event) => {
                self.handle_mouse_event(mouse_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.cancel();
            return;
        }

        let dropdown_open = self.field.dropdown_visible();

        match key.code {
            KeyCode::Down if dropdown_open => self.field.highlight_next(),
            KeyCode::Up if dropdown_open => self.field.highlight_previous(),
            KeyCode::Tab | KeyCode::Enter if dropdown_open => {
                self.field.accept_highlighted();
            }
            KeyCode::Enter => self.submit(),
            // First Esc closes the dropdown, second one leaves
            KeyCode::Esc if dropdown_open => self.field.end_editing(),
            KeyCode::Esc => self.cancel(),
            _ => {
                self.field.apply_input(key);
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
