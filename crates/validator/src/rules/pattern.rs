//! Regular-expression rule
//!
//! Matching uses search semantics: the pattern may match anywhere in the
//! input. Anchor it with `^...$` to require a full match.

use crate::foundation::{Rule, ValidationError};
use regex::Regex;

/// Validates that a compiled pattern matches somewhere in the input.
///
/// `Regex` is reference-counted internally, so cloning the rule shares the
/// compiled program.
#[derive(Debug, Clone)]
pub struct RegexRule {
    pattern: Regex,
}

impl RegexRule {
    #[must_use]
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Compiles `pattern` and wraps it in a rule.
    pub fn from_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::new)
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Source text of the pattern.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl From<Regex> for RegexRule {
    fn from(pattern: Regex) -> Self {
        Self::new(pattern)
    }
}

impl Rule for RegexRule {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::regex_not_matched(self.pattern.as_str()))
        }
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

/// Creates a regex rule from a compiled pattern.
#[must_use]
pub fn regex(pattern: Regex) -> RegexRule {
    RegexRule::new(pattern)
}
