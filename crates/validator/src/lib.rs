//! # strand-validator
//!
//! Composable validation rules for string fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use strand_validator::prelude::*;
//!
//! let id = field_validator!("id", true, uuid(), length(1, 36));
//! assert!(id.validate("4b9e7348-bdda-4584-88c1-a1e9ac4c6595").is_ok());
//!
//! let err = id.validate("12314").unwrap_err();
//! assert!(err.is(ErrorKind::InvalidUuid));
//! assert!(err.to_string().starts_with("id is invalid: "));
//! ```
//!
//! ## Built-in Rules
//!
//! - **Length**: [`LengthRule`](rules::LengthRule): byte length within bounds
//! - **Presence**: [`RequiredRule`](rules::RequiredRule)
//! - **Pattern**: [`RegexRule`](rules::RegexRule): search-semantics regex match
//! - **Temporal**: `DateRule`, `UuidRule` (feature `temporal`)
//!
//! ## Field Validation
//!
//! [`FieldValidator`] runs the required check first, skips every other rule
//! when an optional field is empty, then runs the rules in order and returns
//! the first failure with the field name attached. See [`field`] for details.
//!
//! ## Features
//!
//! - `temporal` (default): `DateRule` and `UuidRule`
//! - `serde` (default): error serialization and the [`config`] module

pub mod field;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;

#[cfg(feature = "serde")]
pub mod config;

pub use field::FieldValidator;
pub use foundation::{ErrorKind, Rule, ValidationError, ValidationResult, Violation};
