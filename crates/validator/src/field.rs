//! Field validator - a named, ordered chain of rules
//!
//! [`FieldValidator`] binds a field name, a required/optional policy and an
//! ordered list of rules. Validation runs in two steps:
//!
//! 1. the required check, always first;
//! 2. the content rules, in insertion order, stopping at the first failure.
//!
//! **An empty value on an optional field skips step 2 entirely.** Content
//! rules (length, pattern, date, UUID) only apply to values that are present,
//! so `field_validator!("nickname", false, length(3, 20))` accepts `""` even
//! though `""` is shorter than 3. Make the field required if an empty value
//! must be rejected.
//!
//! # Examples
//!
//! ```rust
//! use strand_validator::prelude::*;
//!
//! let id = field_validator!("id", true, uuid(), length(1, 36));
//! assert!(id.validate("4b9e7348-bdda-4584-88c1-a1e9ac4c6595").is_ok());
//!
//! let err = id.validate("12314").unwrap_err();
//! assert!(err.is(ErrorKind::InvalidUuid));
//! assert_eq!(err.field(), Some("id"));
//! ```

use crate::foundation::{Rule, SharedRule, ValidationError};
use crate::rules::RequiredRule;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// A named field with a required policy and an ordered rule sequence.
///
/// Immutable after construction and cheap to clone; clones share the rules.
#[derive(Clone)]
pub struct FieldValidator {
    name: String,
    required: RequiredRule,
    rules: Vec<SharedRule>,
}

impl FieldValidator {
    /// Creates a field validator. `rules` run in the order given.
    pub fn new<I>(name: impl Into<String>, required: bool, rules: I) -> Self
    where
        I: IntoIterator<Item = SharedRule>,
    {
        Self {
            name: name.into(),
            required: RequiredRule::new(required),
            rules: rules.into_iter().collect(),
        }
    }

    /// Starts an optional field with no rules; chain [`required`](Self::required)
    /// and [`rule`](Self::rule) to configure it.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, false, Vec::new())
    }

    /// Sets the required policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, required: bool) -> Self {
        self.required = RequiredRule::new(required);
        self
    }

    /// Appends a rule to the end of the sequence.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Appends an already shared rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn shared_rule(mut self, rule: SharedRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_required(&self) -> bool {
        self.required.required
    }

    /// The content rules in execution order. The required check is not included.
    pub fn rules(&self) -> impl ExactSizeIterator<Item = &(dyn Rule + 'static)> + '_ {
        self.rules.iter().map(|rule| &**rule)
    }

    /// Validates `input`, returning the first failure tagged with the field name.
    ///
    /// See the [module documentation](crate::field) for the empty-optional short-circuit.
    pub fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.required
            .validate(input)
            .map_err(|err| self.fail(&self.required, err))?;

        if input.is_empty() {
            return Ok(());
        }

        for rule in &self.rules {
            rule.validate(input).map_err(|err| self.fail(&**rule, err))?;
        }
        Ok(())
    }

    fn fail(&self, rule: &dyn Rule, err: ValidationError) -> ValidationError {
        tracing::trace!(
            field = %self.name,
            rule = rule.name(),
            kind = err.kind().code(),
            "field validation failed"
        );
        err.with_field(self.name.as_str())
    }
}

impl Rule for FieldValidator {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        FieldValidator::validate(self, input)
    }

    fn name(&self) -> &'static str {
        "field"
    }
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("name", &self.name)
            .field("required", &self.required.required)
            .field(
                "rules",
                &self.rules.iter().map(|rule| rule.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_validator;
    use crate::foundation::ErrorKind;
    use crate::rules::length;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct Counting(AtomicUsize);

    impl Rule for Counting {
        fn validate(&self, _input: &str) -> Result<(), ValidationError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Reject;

    impl Rule for Reject {
        fn validate(&self, _input: &str) -> Result<(), ValidationError> {
            Err(ValidationError::too_long(0))
        }
    }

    #[test]
    fn test_required_runs_first() {
        let field = field_validator!("f", true, length(2, 2));
        let err = field.validate("").unwrap_err();
        assert!(err.is(ErrorKind::Required));
        assert_eq!(err.to_string(), "f is invalid: is required");
    }

    #[test]
    fn test_empty_optional_skips_rules() {
        let counter = Arc::new(Counting::default());
        let field = FieldValidator::named("f")
            .rule(length(1, 2))
            .shared_rule(counter.clone());

        assert!(field.validate("").is_ok());
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);

        assert!(field.validate("a").is_ok());
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stops_at_first_failure() {
        let counter = Arc::new(Counting::default());
        let field = FieldValidator::named("f")
            .required(true)
            .rule(Reject)
            .shared_rule(counter.clone());

        let err = field.validate("abc").unwrap_err();
        assert!(err.is(ErrorKind::TooLong));
        assert_eq!(err.field(), Some("f"));
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_rules_run_in_order() {
        let field = field_validator!("f", true, length(5, 10), Reject);
        assert!(field.validate("abc").unwrap_err().is(ErrorKind::TooShort));

        let field = field_validator!("f", true, Reject, length(5, 10));
        assert!(field.validate("abc").unwrap_err().is(ErrorKind::TooLong));
    }

    #[test]
    fn test_no_rules() {
        assert!(field_validator!("f", false).validate("").is_ok());
        assert!(field_validator!("f", false).validate("anything").is_ok());
        assert!(field_validator!("f", true).validate("").is_err());
    }

    #[test]
    fn test_accessors_and_debug() {
        let field = field_validator!("username", true, length(3, 20));
        assert_eq!(field.name(), "username");
        assert!(field.is_required());
        assert_eq!(field.rules().len(), 1);
        assert_eq!(
            format!("{field:?}"),
            r#"FieldValidator { name: "username", required: true, rules: ["length"] }"#
        );
    }

    #[test]
    fn test_new_keeps_order() {
        let rules: Vec<SharedRule> = vec![Arc::new(length(1, 2)), Arc::new(Reject)];
        let field = FieldValidator::new("f", false, rules);
        let names: Vec<_> = field.rules().map(|rule| rule.name()).collect();
        assert_eq!(names[0], "length");
        assert!(names[1].ends_with("Reject"));
    }

    #[test]
    fn test_shared_across_threads() {
        let field = field_validator!("f", true, length(1, 3));
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert!(field.validate("ab").is_ok());
                    assert!(field.validate("abcd").is_err());
                });
            }
        });
    }
}
