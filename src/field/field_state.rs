use std::ops::Range;

use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, Key, TextArea};

use crate::candidates::flatten_line;
use crate::error::AutofieldError;
use crate::suggest::SuggestionFilterEngine;

/// Binds a single-line editor to a `SuggestionFilterEngine`.
///
/// The editor holds what the user is typing; the engine holds the accepted
/// text. After every edit the engine's (possibly truncated) text is written
/// back into the editor so the two never disagree.
pub struct FieldState {
    pub textarea: TextArea<'static>,
    pub engine: SuggestionFilterEngine,
    /// Index into the engine's suggestions
    pub highlighted: usize,
    /// First suggestion shown in the dropdown window
    pub scroll_offset: usize,
    max_visible: usize,
    /// Dropdown rows the last rendered frame had room for
    viewport_rows: usize,
}

impl FieldState {
    pub fn new(engine: SuggestionFilterEngine, placeholder: &str, max_visible: usize) -> Self {
        let mut textarea = TextArea::new(vec![engine.text().to_string()]);
        textarea.set_placeholder_text(placeholder);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);

        Self {
            textarea,
            engine,
            highlighted: 0,
            scroll_offset: 0,
            max_visible: max_visible.max(1),
            viewport_rows: usize::MAX,
        }
    }

    pub fn text(&self) -> &str {
        self.engine.text()
    }

    /// Current editor contents (single line)
    pub fn editor_text(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    pub fn suggestions(&self) -> &[String] {
        self.engine.suggestions()
    }

    pub fn has_suggestions(&self) -> bool {
        !self.engine.suggestions().is_empty()
    }

    pub fn is_editing(&self) -> bool {
        self.engine.is_editing()
    }

    pub fn is_disabled(&self) -> bool {
        self.engine.is_disabled()
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Rows the dropdown can show: `max_visible`, clamped to the screen
    pub fn window_rows(&self) -> usize {
        self.max_visible.min(self.viewport_rows)
    }

    /// Suggestions exist and at least one of them fits on screen
    pub fn dropdown_visible(&self) -> bool {
        self.has_suggestions() && self.window_rows() > 0
    }

    /// Record how many dropdown rows fit below the field and keep the
    /// highlighted row inside that window.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows;
        self.follow_highlight();
    }

    pub fn begin_editing(&mut self) {
        if !self.engine.is_editing() {
            self.engine.set_editing(true);
        }
    }

    pub fn end_editing(&mut self) {
        self.engine.set_editing(false);
        self.reset_highlight();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.engine.set_disabled(disabled);
        self.reset_highlight();
    }

    /// Forward a key to the editor. Returns true when the text changed.
    pub fn apply_input(&mut self, key: KeyEvent) -> bool {
        if self.engine.is_disabled() {
            return false;
        }

        let input = Input::from(key);
        if is_line_break_or_tab(&input) {
            return false;
        }

        if !self.textarea.input(input) {
            return false;
        }

        self.on_editor_changed();
        true
    }

    /// Insert pasted text at the cursor, flattened to a single line
    pub fn insert_paste(&mut self, text: &str) -> bool {
        if self.engine.is_disabled() {
            return false;
        }

        let flattened = flatten_line(text);
        if flattened.is_empty() || !self.textarea.insert_str(&flattened) {
            return false;
        }

        self.on_editor_changed();
        true
    }

    fn on_editor_changed(&mut self) {
        let typed = self.editor_text().to_string();

        self.begin_editing();
        self.engine.set_text(&typed);

        if self.engine.text() != typed {
            let accepted = self.engine.text().to_string();
            self.replace_editor_text(&accepted);
        }

        self.reset_highlight();
    }

    fn replace_editor_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
    }

    fn reset_highlight(&mut self) {
        self.highlighted = 0;
        self.scroll_offset = 0;
    }

    pub fn highlight_next(&mut self) {
        let len = self.suggestions().len();
        if len == 0 {
            return;
        }
        self.highlighted = (self.highlighted + 1) % len;
        self.follow_highlight();
    }

    pub fn highlight_previous(&mut self) {
        let len = self.suggestions().len();
        if len == 0 {
            return;
        }
        self.highlighted = (self.highlighted + len - 1) % len;
        self.follow_highlight();
    }

    fn follow_highlight(&mut self) {
        let window = self.window_rows();
        if window == 0 {
            return;
        }
        if self.highlighted < self.scroll_offset {
            self.scroll_offset = self.highlighted;
        } else if self.highlighted >= self.scroll_offset.saturating_add(window) {
            self.scroll_offset = self.highlighted + 1 - window;
        }
    }

    /// Range of suggestions currently shown in the dropdown
    pub fn visible_range(&self) -> Range<usize> {
        let len = self.suggestions().len();
        let start = self.scroll_offset.min(len);
        let end = start.saturating_add(self.window_rows()).min(len);
        start..end
    }

    pub fn highlighted_suggestion(&self) -> Option<&str> {
        self.suggestions().get(self.highlighted).map(String::as_str)
    }

    pub fn accept_highlighted(&mut self) -> bool {
        let Some(choice) = self.highlighted_suggestion().map(str::to_string) else {
            return false;
        };
        self.accept(&choice).is_ok()
    }

    pub fn accept(&mut self, choice: &str) -> Result<(), AutofieldError> {
        self.engine.select_suggestion(choice)?;

        let accepted = self.engine.text().to_string();
        self.replace_editor_text(&accepted);
        self.reset_highlight();
        Ok(())
    }
}

fn is_line_break_or_tab(input: &Input) -> bool {
    matches!(
        input,
        Input { key: Key::Enter, .. }
            | Input { key: Key::Tab, .. }
            | Input { key: Key::Char('\n' | '\r'), .. }
            | Input { key: Key::Char('m' | 'j'), ctrl: true, .. }
    )
}

#[cfg(test)]
#[path = "field_state_tests.rs"]
mod field_state_tests;
