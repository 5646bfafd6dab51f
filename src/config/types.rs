// Configuration type definitions

use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::AutofieldError;
use crate::suggest::{DEFAULT_MIN_CHARS_TO_TRIGGER, DEFAULT_TEXT_LIMIT, FieldOptions};

pub const DEFAULT_PLACEHOLDER: &str = "Type to search...";
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Input field section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub placeholder: String,
    pub text_limit: usize,
    pub min_chars_to_trigger: usize,
    pub disabled: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            text_limit: DEFAULT_TEXT_LIMIT,
            min_chars_to_trigger: DEFAULT_MIN_CHARS_TO_TRIGGER,
            disabled: false,
        }
    }
}

/// Suggestion dropdown section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Rows shown before the dropdown scrolls
    pub max_visible: usize,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        DropdownConfig {
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

/// Color names as accepted by ratatui (`"gray"`, `"dark gray"`, `"#ff8800"`, `"reset"`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub foreground: String,
    pub background: String,
    pub disabled_background: String,
    pub editing_border: String,
    pub idle_border: String,
    pub highlight: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            foreground: "gray".to_string(),
            background: "reset".to_string(),
            disabled_background: "yellow".to_string(),
            editing_border: "cyan".to_string(),
            idle_border: "darkgray".to_string(),
            highlight: "cyan".to_string(),
        }
    }
}

/// Resolved colors used by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldStyle {
    pub foreground: Color,
    pub background: Color,
    pub disabled_background: Color,
    pub editing_border: Color,
    pub idle_border: Color,
    pub highlight: Color,
}

impl Default for FieldStyle {
    fn default() -> Self {
        FieldStyle {
            foreground: Color::Gray,
            background: Color::Reset,
            disabled_background: Color::Yellow,
            editing_border: Color::Cyan,
            idle_border: Color::DarkGray,
            highlight: Color::Cyan,
        }
    }
}

impl StyleConfig {
    pub fn resolve(&self) -> Result<FieldStyle, AutofieldError> {
        Ok(FieldStyle {
            foreground: parse_color("foreground", &self.foreground)?,
            background: parse_color("background", &self.background)?,
            disabled_background: parse_color("disabled_background", &self.disabled_background)?,
            editing_border: parse_color("editing_border", &self.editing_border)?,
            idle_border: parse_color("idle_border", &self.idle_border)?,
            highlight: parse_color("highlight", &self.highlight)?,
        })
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, AutofieldError> {
    Color::from_str(value).map_err(|_| {
        AutofieldError::InvalidConfig(format!("style.{} has unknown color {:?}", key, value))
    })
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub dropdown: DropdownConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

impl Config {
    pub fn field_options(&self) -> FieldOptions {
        FieldOptions {
            text_limit: self.field.text_limit,
            min_chars_to_trigger: self.field.min_chars_to_trigger,
            disabled: self.field.disabled,
        }
    }

    pub fn validate(&self) -> Result<(), AutofieldError> {
        self.field_options().validate()?;
        if self.dropdown.max_visible == 0 {
            return Err(AutofieldError::InvalidConfig(
                "dropdown.max_visible must be at least 1".to_string(),
            ));
        }
        self.style.resolve()?;
        Ok(())
    }
}
