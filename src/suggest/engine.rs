//! Suggestion filtering and input-state logic
//!
//! `SuggestionFilterEngine` owns the field text, the fixed candidate list and
//! the filtered suggestions derived from them. It knows nothing about
//! terminals; the field layer forwards text-change and focus-change events
//! into it and reads the results back out.

use crate::error::AutofieldError;

use super::matcher::SubstringMatcher;

pub const DEFAULT_TEXT_LIMIT: usize = 50;
pub const DEFAULT_MIN_CHARS_TO_TRIGGER: usize = 2;

/// Input constraints applied by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOptions {
    /// Maximum number of characters kept in the text
    pub text_limit: usize,
    /// Suggestions appear once the text is longer than this
    pub min_chars_to_trigger: usize,
    pub disabled: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            text_limit: DEFAULT_TEXT_LIMIT,
            min_chars_to_trigger: DEFAULT_MIN_CHARS_TO_TRIGGER,
            disabled: false,
        }
    }
}

impl FieldOptions {
    pub fn validate(&self) -> Result<(), AutofieldError> {
        if self.text_limit == 0 {
            return Err(AutofieldError::InvalidConfig(
                "text_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SuggestionFilterEngine {
    text: String,
    candidates: Box<[String]>,
    matcher: SubstringMatcher,
    filtered: Vec<String>,
    editing: bool,
    options: FieldOptions,
}

impl SuggestionFilterEngine {
    pub fn new(
        initial_text: &str,
        candidates: Vec<String>,
        options: FieldOptions,
    ) -> Result<Self, AutofieldError> {
        options.validate()?;

        let matcher = SubstringMatcher::new(&candidates);

        Ok(Self {
            text: truncate_chars(initial_text, options.text_limit),
            candidates: candidates.into_boxed_slice(),
            matcher,
            filtered: Vec::new(),
            editing: false,
            options,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.filtered
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_disabled(&self) -> bool {
        self.options.disabled
    }

    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    /// Replace the text, keeping at most `text_limit` characters.
    ///
    /// Ignored while the field is disabled.
    pub fn set_text(&mut self, new_text: &str) {
        if self.options.disabled {
            log::debug!("Ignoring text change on disabled field");
            return;
        }

        self.text = truncate_chars(new_text, self.options.text_limit);
        self.recompute_suggestions();
    }

    pub fn recompute_suggestions(&mut self) {
        if self.options.disabled
            || !self.editing
            || self.char_count() <= self.options.min_chars_to_trigger
        {
            self.filtered.clear();
            return;
        }

        self.filtered = self
            .matcher
            .filter(&self.text)
            .into_iter()
            .map(|idx| self.candidates[idx].clone())
            .collect();

        log::debug!(
            "{} of {} candidates match {:?}",
            self.filtered.len(),
            self.candidates.len(),
            self.text
        );
    }

    /// Focus-change event. Losing focus drops any visible suggestions.
    pub fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
        if !editing {
            self.filtered.clear();
        }
    }

    /// Accept one of the current suggestions as the field text.
    ///
    /// Leaves the state untouched when the field is disabled or `choice` is
    /// not currently offered.
    pub fn select_suggestion(&mut self, choice: &str) -> Result<(), AutofieldError> {
        if self.options.disabled {
            return Err(AutofieldError::FieldDisabled);
        }
        if !self.filtered.iter().any(|s| s == choice) {
            return Err(AutofieldError::SuggestionNotOffered(choice.to_string()));
        }

        log::debug!("Selected suggestion {:?}", choice);

        self.text = truncate_chars(choice, self.options.text_limit);
        self.editing = false;
        self.filtered.clear();
        Ok(())
    }

    /// A disabled field also stops editing, so no suggestions stay open.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
        if disabled {
            self.set_editing(false);
        }
    }
}

/// Keep the first `limit` characters of `text`
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
