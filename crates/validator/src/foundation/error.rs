//! Validation error types
//!
//! Every rule failure is a [`Violation`]: one of six fixed categories plus the
//! detail that explains it (the violated bound, the pattern source, the parser
//! message). A [`ValidationError`] wraps a violation and, once a
//! [`FieldValidator`](crate::FieldValidator) has seen it, the name of the field.
//!
//! Callers branch on [`ErrorKind`] rather than on message text:
//!
//! ```rust
//! use strand_validator::prelude::*;
//!
//! let err = length(3, 5).validate("ab").unwrap_err();
//! assert!(err.is(ErrorKind::TooShort));
//! assert_eq!(err.to_string(), "should not be shorter than 3");
//! ```

use std::fmt;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The category of a validation failure, independent of its detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// Content length under the minimum.
    TooShort,
    /// Content length over the maximum.
    TooLong,
    /// Content missing when mandatory.
    Required,
    /// Content did not satisfy a pattern rule.
    RegexNotMatched,
    /// Content could not be parsed under a date layout.
    InvalidDate,
    /// Content could not be parsed as a UUID.
    InvalidUuid,
}

impl ErrorKind {
    /// All kinds, in declaration order.
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::TooShort,
        ErrorKind::TooLong,
        ErrorKind::Required,
        ErrorKind::RegexNotMatched,
        ErrorKind::InvalidDate,
        ErrorKind::InvalidUuid,
    ];

    /// Stable machine-readable code, e.g. `"too_short"`.
    pub const fn code(self) -> &'static str {
        match self {
            ErrorKind::TooShort => "too_short",
            ErrorKind::TooLong => "too_long",
            ErrorKind::Required => "required",
            ErrorKind::RegexNotMatched => "regex_not_matched",
            ErrorKind::InvalidDate => "invalid_date",
            ErrorKind::InvalidUuid => "invalid_uuid",
        }
    }

    /// Base message for the kind, without any detail.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::TooShort => "should not be shorter than",
            ErrorKind::TooLong => "should not be longer than",
            ErrorKind::Required => "is required",
            ErrorKind::RegexNotMatched => "should satisfy the regex",
            ErrorKind::InvalidDate => "should be a parseable date string",
            ErrorKind::InvalidUuid => "should be a parseable uuid string",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// A single rule failure together with its detail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
#[non_exhaustive]
pub enum Violation {
    #[error("should not be shorter than {min}")]
    TooShort { min: usize },

    #[error("should not be longer than {max}")]
    TooLong { max: usize },

    #[error("is required")]
    Required,

    #[error("should satisfy the regex {pattern}")]
    RegexNotMatched { pattern: String },

    /// `detail` is the date parser's own message.
    #[error("should be a parseable date string, {detail}")]
    InvalidDate { detail: String },

    /// `detail` is the UUID parser's own message.
    #[error("should be a parseable uuid string, {detail}")]
    InvalidUuid { detail: String },
}

impl Violation {
    /// Returns the category of this violation.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Violation::TooShort { .. } => ErrorKind::TooShort,
            Violation::TooLong { .. } => ErrorKind::TooLong,
            Violation::Required => ErrorKind::Required,
            Violation::RegexNotMatched { .. } => ErrorKind::RegexNotMatched,
            Violation::InvalidDate { .. } => ErrorKind::InvalidDate,
            Violation::InvalidUuid { .. } => ErrorKind::InvalidUuid,
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Error returned by rules and field validators.
///
/// Rules produce errors without a field; [`FieldValidator`](crate::FieldValidator)
/// attaches its name with [`with_field`](Self::with_field) before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    field: Option<String>,
    violation: Violation,
}

impl ValidationError {
    /// Creates an error for `violation` with no field attached.
    pub fn new(violation: Violation) -> Self {
        Self {
            field: None,
            violation,
        }
    }

    pub fn too_short(min: usize) -> Self {
        Self::new(Violation::TooShort { min })
    }

    pub fn too_long(max: usize) -> Self {
        Self::new(Violation::TooLong { max })
    }

    pub fn required() -> Self {
        Self::new(Violation::Required)
    }

    pub fn regex_not_matched(pattern: impl Into<String>) -> Self {
        Self::new(Violation::RegexNotMatched {
            pattern: pattern.into(),
        })
    }

    pub fn invalid_date(detail: impl fmt::Display) -> Self {
        Self::new(Violation::InvalidDate {
            detail: detail.to_string(),
        })
    }

    pub fn invalid_uuid(detail: impl fmt::Display) -> Self {
        Self::new(Violation::InvalidUuid {
            detail: detail.to_string(),
        })
    }

    /// Attaches the name of the field that failed.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Name of the field that failed, if the error went through a field validator.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn violation(&self) -> &Violation {
        &self.violation
    }

    pub fn into_violation(self) -> Violation {
        self.violation
    }

    /// Returns the category of this error.
    pub const fn kind(&self) -> ErrorKind {
        self.violation.kind()
    }

    /// Checks the category without looking at field or detail.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind() == kind
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(name) => write!(f, "{name} is invalid: {}", self.violation),
            None => fmt::Display::fmt(&self.violation, f),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.violation)
    }
}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        Self::new(violation)
    }
}

impl PartialEq<ErrorKind> for ValidationError {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.is(*other)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationError", 4)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("code", self.kind().code())?;
        state.serialize_field("violation", &self.violation)?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result alias used throughout the crate.
pub type ValidationResult<T = ()> = Result<T, ValidationError>;
