use thiserror::Error;

/// Custom error types for autofield
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutofieldError {
    #[error("'{0}' is not among the current suggestions")]
    SuggestionNotOffered(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No candidates provided.\n\nPipe candidates on stdin, pass a file, or use --candidate.")]
    NoCandidates,

    #[error("The field is disabled")]
    FieldDisabled,

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AutofieldError {
    fn from(err: std::io::Error) -> Self {
        AutofieldError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
