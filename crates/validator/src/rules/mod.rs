//! Built-in rules
//!
//! - **Length**: [`LengthRule`] / [`length()`] (byte length within bounds)
//! - **Presence**: [`RequiredRule`] / [`required()`]
//! - **Pattern**: [`RegexRule`] / [`regex()`]
//! - **Temporal** (feature `temporal`): [`DateRule`] / [`date()`],
//!   [`UuidRule`] / [`uuid()`]
//!
//! # Examples
//!
//! ```rust
//! use strand_validator::prelude::*;
//!
//! assert!(length(1, 36).validate("hello").is_ok());
//! assert!(required(true).validate("").is_err());
//! ```

pub mod length;
pub mod pattern;
pub mod required;

#[cfg(feature = "temporal")]
pub mod date;
#[cfg(feature = "temporal")]
pub mod identifier;

pub use length::{LengthRule, length};
pub use pattern::{RegexRule, regex};
pub use required::{RequiredRule, required};

#[cfg(feature = "temporal")]
pub use date::{DateLayout, DateRule, date};
#[cfg(feature = "temporal")]
pub use identifier::{UuidRule, uuid};
