//! The rule contract
//!
//! Everything that checks a string implements [`Rule`]. Rules hold only the
//! configuration they were built with and never mutate it, so a single rule
//! value can be shared across threads and reused for any number of inputs.

use crate::foundation::ValidationError;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A predicate over a single string.
///
/// # Examples
///
/// ```rust
/// use strand_validator::foundation::{Rule, ValidationError};
///
/// #[derive(Debug)]
/// struct NoWhitespace;
///
/// impl Rule for NoWhitespace {
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().any(char::is_whitespace) {
///             Err(ValidationError::regex_not_matched(r"^\S*$"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoWhitespace.validate("abc").is_ok());
/// assert!(NoWhitespace.validate("a c").is_err());
/// ```
pub trait Rule: fmt::Debug + Send + Sync {
    /// Checks `input`, returning the first violation found.
    fn validate(&self, input: &str) -> Result<(), ValidationError>;

    /// Identifier used in trace output.
    ///
    /// Defaults to the full type path; built-in rules return a short
    /// snake_case name such as `"length"`.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// A rule behind a shared pointer, the element type of a field validator's rule list.
pub type SharedRule = Arc<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct AlwaysValid;

    impl Rule for AlwaysValid {
        fn validate(&self, _input: &str) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[derive(Debug)]
    struct AlwaysFails;

    impl Rule for AlwaysFails {
        fn validate(&self, _input: &str) -> Result<(), ValidationError> {
            Err(ValidationError::required())
        }

        fn name(&self) -> &'static str {
            "always_fails"
        }
    }

    #[test]
    fn test_rule_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
        assert!(AlwaysFails.validate("test").is_err());
    }

    #[test]
    fn test_default_name_is_type_name() {
        assert!(AlwaysValid.name().ends_with("AlwaysValid"));
        assert_eq!(AlwaysFails.name(), "always_fails");
    }

    #[test]
    fn test_pointers_delegate() {
        fn check<R: Rule>(rule: R) -> bool {
            rule.validate("x").is_ok()
        }

        let boxed: Box<dyn Rule> = Box::new(AlwaysFails);
        let shared: SharedRule = Arc::new(AlwaysFails);
        assert!(boxed.validate("x").is_err());
        assert!(shared.validate("x").is_err());
        assert_eq!(shared.name(), "always_fails");

        let borrowed: &dyn Rule = &&AlwaysFails;
        assert!(borrowed.validate("x").is_err());
        assert_eq!(borrowed.name(), "always_fails");
        assert!(check(&AlwaysValid));
        assert!(!check(&&AlwaysFails));
    }

    #[test]
    fn test_rules_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedRule>();
        assert_send_sync::<Box<dyn Rule>>();
    }
}
