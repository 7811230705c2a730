//! Path expression grammar
//!
//! A path expression is a string of `/`-separated steps. A step is an
//! identifier (letters, digits, underscore), a decimal integer (optionally
//! negative), or empty. Empty steps (produced by consecutive, leading or
//! trailing slashes) are skipped. There is no escaping mechanism for a
//! literal `/` inside a step.

/// One segment of a path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    name: String,
}

impl Step {
    /// Create a step from its textual form
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The textual form of the step
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parse the step as a base-10 integer index, if it is one
    pub fn as_index(&self) -> Option<i64> {
        self.name.parse().ok()
    }

    /// Consume the step, yielding its textual form
    pub fn into_name(self) -> String {
        self.name
    }
}

/// Split a path expression into its steps, skipping empty segments
pub fn parse_path(path: &str) -> Vec<Step> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(Step::new)
        .collect()
}

/// Split off the first step of a path expression, returning it together with
/// the remainder of the path. Returns `None` when the path has no steps.
pub fn split_first_step(path: &str) -> Option<(Step, &str)> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.split_once('/') {
        Some((first, rest)) => Some((Step::new(first), rest)),
        None => Some((Step::new(trimmed), "")),
    }
}
