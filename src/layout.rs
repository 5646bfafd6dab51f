//! Region tracking for mouse interactions
//!
//! `LayoutRegions` remembers where the field and the dropdown were drawn on
//! the last frame, and `region_at()` maps a click position back to them.

use ratatui::layout::{Position, Rect};

/// Clickable parts of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Field,
    Dropdown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub field: Option<Rect>,
    pub dropdown: Option<Rect>,
}

/// Which region contains the cell at (`column`, `row`).
///
/// The dropdown is checked first since it is drawn on top.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);

    if regions.dropdown.is_some_and(|area| area.contains(position)) {
        return Some(Region::Dropdown);
    }
    if regions.field.is_some_and(|area| area.contains(position)) {
        return Some(Region::Field);
    }
    None
}
