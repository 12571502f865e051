//! Presence check

use crate::foundation::{Rule, ValidationError};

/// Fails on an empty string when `required` is set; otherwise always passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RequiredRule {
    pub required: bool,
}

impl RequiredRule {
    #[must_use]
    pub const fn new(required: bool) -> Self {
        Self { required }
    }
}

impl Rule for RequiredRule {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.required && input.is_empty() {
            Err(ValidationError::required())
        } else {
            Ok(())
        }
    }

    fn name(&self) -> &'static str {
        "required"
    }
}

/// Creates a required rule.
#[must_use]
pub const fn required(required: bool) -> RequiredRule {
    RequiredRule::new(required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case::empty_and_required("", true, Some(ErrorKind::Required))]
    #[case::empty_not_required("", false, None)]
    #[case::present_and_required("123", true, None)]
    #[case::present_not_required("123", false, None)]
    fn test_required(
        #[case] input: &str,
        #[case] is_required: bool,
        #[case] expected: Option<ErrorKind>,
    ) {
        let result = required(is_required).validate(input);
        assert_eq!(result.err().map(|e| e.kind()), expected);
    }

    #[test]
    fn test_whitespace_is_present() {
        assert!(required(true).validate(" ").is_ok());
    }

    #[test]
    fn test_default_is_optional() {
        assert!(RequiredRule::default().validate("").is_ok());
    }
}
