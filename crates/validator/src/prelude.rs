//! Prelude module for convenient imports.
//!
//! ```rust
//! use strand_validator::prelude::*;
//!
//! let name = field_validator!("name", true, length(1, 64));
//! assert!(name.validate("Ada").is_ok());
//! ```

pub use crate::foundation::{
    ErrorKind, Rule, SharedRule, ValidationError, ValidationResult, Violation,
};

pub use crate::rules::{LengthRule, RegexRule, RequiredRule, length, regex, required};

#[cfg(feature = "temporal")]
pub use crate::rules::{DateLayout, DateRule, UuidRule, date, uuid};

pub use crate::field::FieldValidator;
pub use crate::field_validator;

#[cfg(feature = "serde")]
pub use crate::config::{ConfigError, FieldConfig, RuleConfig};
