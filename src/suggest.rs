mod engine;
mod matcher;
pub mod suggest_render;

pub use engine::{
    DEFAULT_MIN_CHARS_TO_TRIGGER, DEFAULT_TEXT_LIMIT, FieldOptions, SuggestionFilterEngine,
    truncate_chars,
};
pub use matcher::SubstringMatcher;
