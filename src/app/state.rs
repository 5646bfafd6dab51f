use crate::config::{Config, FieldStyle};
use crate::error::AutofieldError;
use crate::field::FieldState;
use crate::layout::LayoutRegions;
use crate::suggest::SuggestionFilterEngine;

/// How the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Submitted(String),
    Cancelled,
}

/// Application state
pub struct App {
    pub field: FieldState,
    pub style: FieldStyle,
    pub regions: LayoutRegions,
    outcome: Option<Outcome>,
}

impl App {
    pub fn new(
        candidates: Vec<String>,
        initial_text: &str,
        config: &Config,
    ) -> Result<Self, AutofieldError> {
        config.validate()?;

        let engine = SuggestionFilterEngine::new(initial_text, candidates, config.field_options())?;
        let field = FieldState::new(engine, &config.field.placeholder, config.dropdown.max_visible);

        Ok(Self {
            field,
            style: config.style.resolve()?,
            regions: LayoutRegions::default(),
            outcome: None,
        })
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn submit(&mut self) {
        log::debug!("Submitting {:?}", self.field.text());
        self.outcome = Some(Outcome::Submitted(self.field.text().to_string()));
    }

    pub fn cancel(&mut self) {
        self.outcome = Some(Outcome::Cancelled);
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
