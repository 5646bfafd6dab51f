use std::fmt;

/// Case-insensitive substring matcher over a fixed candidate list.
///
/// Candidates are case-folded once at construction so each keystroke only
/// folds the query.
#[derive(Clone)]
pub struct SubstringMatcher {
    folded: Vec<String>,
}

impl fmt::Debug for SubstringMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubstringMatcher")
            .field("candidates", &self.folded.len())
            .finish()
    }
}

impl SubstringMatcher {
    pub fn new(candidates: &[String]) -> Self {
        Self {
            folded: candidates.iter().map(|c| c.to_lowercase()).collect(),
        }
    }

    /// Indices of candidates containing `query`, in candidate order
    pub fn filter(&self, query: &str) -> Vec<usize> {
        let needle = query.to_lowercase();

        self.folded
            .iter()
            .enumerate()
            .filter(|(_, candidate)| candidate.contains(needle.as_str()))
            .map(|(idx, _)| idx)
            .collect()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
