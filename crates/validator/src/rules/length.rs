//! Byte-length bounds
//!
//! Length is the number of bytes in the UTF-8 encoding (`str::len`), not the
//! number of characters: `"é"` has length 2.

use crate::foundation::{Rule, ValidationError};

/// Validates that a string's byte length is within `min..=max`.
///
/// The lower bound is checked first. An inverted range (`min > max`) is
/// accepted at construction and rejects every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRule {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: usize,
}

impl LengthRule {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Exact length, `min == max == len`.
    #[must_use]
    pub const fn exact(len: usize) -> Self {
        Self { min: len, max: len }
    }
}

impl Rule for LengthRule {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let len = input.len();
        if len < self.min {
            return Err(ValidationError::too_short(self.min));
        }
        if len > self.max {
            return Err(ValidationError::too_long(self.max));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

/// Creates a length rule.
#[must_use]
pub const fn length(min: usize, max: usize) -> LengthRule {
    LengthRule::new(min, max)
}
