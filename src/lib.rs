//! A terminal text field with inline autocomplete suggestions.
//!
//! [`SuggestionFilterEngine`] holds the input text, the fixed candidate list
//! and the suggestions filtered from it. The rest of the crate binds it to a
//! ratatui text field and dropdown.

pub mod app;
pub mod candidates;
pub mod cli;
pub mod config;
pub mod error;
pub mod field;
pub mod layout;
pub mod suggest;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use error::AutofieldError;
pub use suggest::{FieldOptions, SuggestionFilterEngine};
