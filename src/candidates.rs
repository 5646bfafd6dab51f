use crate::error::AutofieldError;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

/// Read the candidate list from a file, stdin, or inline values
pub struct CandidateReader;

impl CandidateReader {
    /// Collect candidates for the picker
    ///
    /// # Arguments
    /// * `path` - Optional file path. If None and no inline values are given, reads piped stdin.
    /// * `inline` - Extra candidates appended after the file or stdin ones
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Candidates in input order
    /// * `Err(AutofieldError)` - If there is no source or IO fails
    pub fn read(path: Option<&Path>, inline: &[String]) -> Result<Vec<String>, AutofieldError> {
        let mut candidates = match path {
            Some(file_path) => parse_candidates(&fs::read_to_string(file_path)?),
            None if !inline.is_empty() => Vec::new(),
            None if io::stdin().is_terminal() => return Err(AutofieldError::NoCandidates),
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                parse_candidates(&buffer)
            }
        };

        candidates.extend(inline.iter().map(|c| flatten_line(c)));

        log::debug!("Loaded {} candidates", candidates.len());
        Ok(candidates)
    }
}

/// Parse a JSON array of strings, or one candidate per non-blank line.
///
/// Content that merely starts with `[` but is not a string array, such as
/// `[WIP] Apple`, is read line by line.
pub fn parse_candidates(content: &str) -> Vec<String> {
    if content.trim_start().starts_with('[') {
        match serde_json::from_str::<Vec<String>>(content) {
            Ok(values) => return values.iter().map(|v| flatten_line(v)).collect(),
            Err(e) => log::debug!("Candidates are not a JSON array ({}), reading lines", e),
        }
    }

    content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Collapse line breaks to single spaces so text fits a one-line field
pub fn flatten_line(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

#[cfg(test)]
#[path = "candidates_tests.rs"]
mod candidates_tests;
