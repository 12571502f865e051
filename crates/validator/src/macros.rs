//! Macros for assembling field validators.
//!
//! - [`field_validator!`]: name, required flag, then any number of rules

// ============================================================================
// FIELD_VALIDATOR MACRO
// ============================================================================

/// Builds a [`FieldValidator`](crate::FieldValidator) from a name, a required
/// flag and a variadic list of rules, which run in the order written.
///
/// ```rust
/// use strand_validator::prelude::*;
///
/// let code = field_validator!(
///     "code",
///     true,
///     length(2, 8),
///     RegexRule::from_pattern("^[A-Z]+$").unwrap(),
/// );
/// assert!(code.validate("ABC").is_ok());
/// assert!(code.validate("abc").unwrap_err().is(ErrorKind::RegexNotMatched));
///
/// // no rules: only the required check
/// let note = field_validator!("note", false);
/// assert!(note.validate("").is_ok());
/// ```
#[macro_export]
macro_rules! field_validator {
    ($name:expr, $required:expr $(,)?) => {
        $crate::FieldValidator::new(
            $name,
            $required,
            ::std::vec::Vec::<$crate::foundation::SharedRule>::new(),
        )
    };
    ($name:expr, $required:expr, $($rule:expr),+ $(,)?) => {{
        let rules: ::std::vec::Vec<$crate::foundation::SharedRule> = ::std::vec![
            $(::std::sync::Arc::new($rule) as $crate::foundation::SharedRule),+
        ];
        $crate::FieldValidator::new($name, $required, rules)
    }};
}
