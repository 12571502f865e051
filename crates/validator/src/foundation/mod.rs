//! Core validation types and traits
//!
//! - **Traits**: [`Rule`]
//! - **Errors**: [`ErrorKind`], [`Violation`], [`ValidationError`]
//!
//! Rules are plain values implementing [`Rule`]; they are composed by
//! [`FieldValidator`](crate::FieldValidator), which runs them in order and
//! stops at the first failure.

pub mod error;
pub mod traits;

pub use error::{ErrorKind, ValidationError, ValidationResult, Violation};
pub use traits::{Rule, SharedRule};

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs `rules` against `input` in order and returns the first failure.
///
/// This is the sequencing step of a field validator without the
/// required/optional handling or the field name.
///
/// ```rust
/// use strand_validator::prelude::*;
/// use strand_validator::foundation::validate_all;
///
/// let rules: [&dyn Rule; 2] = [&length(1, 4), &RegexRule::from_pattern("^[a-z]+$").unwrap()];
/// assert!(validate_all("abc", rules).is_ok());
/// assert!(validate_all("abc1", rules).unwrap_err().is(ErrorKind::RegexNotMatched));
/// ```
pub fn validate_all<'a, I>(input: &str, rules: I) -> ValidationResult
where
    I: IntoIterator<Item = &'a dyn Rule>,
{
    rules.into_iter().try_for_each(|rule| rule.validate(input))
}
