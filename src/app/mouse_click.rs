//! Mouse handling
//!
//! Clicking a dropdown row selects that suggestion, clicking the field
//! focuses it, and clicking anywhere else takes focus away.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::state::App;
use crate::layout::{Region, region_at};
use crate::suggest::suggest_render::dropdown_row_at;

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(region, mouse.row),
            MouseEventKind::ScrollDown if region == Some(Region::Dropdown) => {
                self.field.highlight_next();
            }
            MouseEventKind::ScrollUp if region == Some(Region::Dropdown) => {
                self.field.highlight_previous();
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, region: Option<Region>, row: u16) {
        match region {
            Some(Region::Dropdown) => self.click_dropdown_row(row),
            Some(Region::Field) => self.field.begin_editing(),
            None => self.field.end_editing(),
        }
    }

    fn click_dropdown_row(&mut self, row: u16) {
        let Some(area) = self.regions.dropdown else {
            return;
        };
        let Some(offset) = dropdown_row_at(area, row) else {
            return;
        };

        let index = self.field.visible_range().start + offset;
        let Some(choice) = self.field.suggestions().get(index).cloned() else {
            return;
        };

        if let Err(e) = self.field.accept(&choice) {
            log::debug!("Click on stale dropdown row: {}", e);
        }
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
