//! Declarative field definitions
//!
//! [`FieldConfig`] describes a field validator as data so a host can keep its
//! rules next to the rest of its configuration and build validators at
//! startup:
//!
//! ```rust
//! use strand_validator::config::FieldConfig;
//!
//! let config: FieldConfig = serde_json::from_str(r#"{
//!     "name": "id",
//!     "required": true,
//!     "rules": [
//!         { "rule": "uuid" },
//!         { "rule": "length", "min": 1, "max": 36 }
//!     ]
//! }"#).unwrap();
//!
//! let id = config.build().unwrap();
//! assert!(id.validate("4b9e7348-bdda-4584-88c1-a1e9ac4c6595").is_ok());
//! ```
//!
//! Regex patterns are compiled by [`FieldConfig::build`]; a bad pattern is a
//! [`ConfigError`], never a validation failure.

use crate::field::FieldValidator;
use crate::foundation::SharedRule;
use crate::rules::{LengthRule, RegexRule};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[cfg(feature = "temporal")]
use crate::rules::{DateLayout, DateRule, UuidRule};

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while turning a [`FieldConfig`] into a [`FieldValidator`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("field '{field}': invalid regex pattern '{pattern}'")]
    InvalidPattern {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

// ============================================================================
// RULE CONFIG
// ============================================================================

/// One rule, tagged by `"rule"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleConfig {
    Length {
        min: usize,
        max: usize,
    },
    Regex {
        pattern: String,
    },
    #[cfg(feature = "temporal")]
    Date {
        layout: DateLayout,
    },
    #[cfg(feature = "temporal")]
    Uuid,
}

impl RuleConfig {
    /// Builds the rule for `field`, compiling the pattern for
    /// [`RuleConfig::Regex`].
    pub fn build(&self, field: &str) -> Result<SharedRule, ConfigError> {
        let rule: SharedRule = match self {
            RuleConfig::Length { min, max } => Arc::new(LengthRule::new(*min, *max)),
            RuleConfig::Regex { pattern } => {
                let compiled =
                    RegexRule::from_pattern(pattern).map_err(|source| ConfigError::InvalidPattern {
                        field: field.to_owned(),
                        pattern: pattern.clone(),
                        source,
                    })?;
                Arc::new(compiled)
            }
            #[cfg(feature = "temporal")]
            RuleConfig::Date { layout } => Arc::new(DateRule::new(layout.clone())),
            #[cfg(feature = "temporal")]
            RuleConfig::Uuid => Arc::new(UuidRule),
        };
        Ok(rule)
    }
}

// ============================================================================
// FIELD CONFIG
// ============================================================================

/// A field validator described as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl FieldConfig {
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
            rules: Vec::new(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, rule: RuleConfig) -> Self {
        self.rules.push(rule);
        self
    }

    /// Builds a validator with the rules in the order listed.
    pub fn build(&self) -> Result<FieldValidator, ConfigError> {
        let rules = self
            .rules
            .iter()
            .map(|rule| rule.build(&self.name))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            field = %self.name,
            required = self.required,
            rules = rules.len(),
            "built field validator"
        );

        Ok(FieldValidator::new(self.name.as_str(), self.required, rules))
    }
}

impl TryFrom<FieldConfig> for FieldValidator {
    type Error = ConfigError;

    fn try_from(config: FieldConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

impl TryFrom<&FieldConfig> for FieldValidator {
    type Error = ConfigError;

    fn try_from(config: &FieldConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}
