//! Date parseability
//!
//! [`DateRule`] only attests that the input parses under a layout; the parsed
//! value is discarded.

use crate::foundation::{Rule, ValidationError};
use chrono::format::{Parsed, StrftimeItems};
use chrono::{DateTime, NaiveDate};

// ============================================================================
// DATE LAYOUT
// ============================================================================

/// The textual layout a date string must follow.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DateLayout {
    /// RFC 3339 date-time with offset, e.g. `2021-11-20T18:01:24.100+00:00`.
    /// Fractional seconds are optional. The date and time may also be
    /// separated by a lowercase `t` or a single space, as RFC 3339 permits.
    Rfc3339,
    /// RFC 2822 date-time, e.g. `Sat, 20 Nov 2021 18:01:24 +0000`.
    Rfc2822,
    /// Calendar date `YYYY-MM-DD`.
    DateOnly,
    /// A `strftime`-style format. The whole input must be consumed; fields
    /// the format does not mention are left unset.
    ///
    /// Whatever the format does populate must describe a real instant: the
    /// day must exist in its month, a weekday must agree with the date, and
    /// a full date, time and offset must resolve together. A format with a
    /// month or day but no year is checked against year 0, a leap year; a
    /// missing month or day counts as the first.
    Custom(String),
}

impl DateLayout {
    pub fn custom(format: impl Into<String>) -> Self {
        DateLayout::Custom(format.into())
    }

    fn parse(&self, input: &str) -> chrono::ParseResult<()> {
        match self {
            DateLayout::Rfc3339 => DateTime::parse_from_rfc3339(input).map(drop),
            DateLayout::Rfc2822 => DateTime::parse_from_rfc2822(input).map(drop),
            DateLayout::DateOnly => NaiveDate::parse_from_str(input, "%Y-%m-%d").map(drop),
            DateLayout::Custom(format) => {
                let mut parsed = Parsed::new();
                chrono::format::parse(&mut parsed, input, StrftimeItems::new(format))?;
                resolve(parsed)
            }
        }
    }
}

/// Checks that the populated fields of `parsed` are consistent with each other.
fn resolve(mut parsed: Parsed) -> chrono::ParseResult<()> {
    let has_year = parsed.year().is_some()
        || parsed.year_div_100().is_some()
        || parsed.year_mod_100().is_some()
        || parsed.isoyear().is_some()
        || parsed.isoyear_div_100().is_some()
        || parsed.isoyear_mod_100().is_some();
    let has_week = parsed.isoweek().is_some()
        || parsed.week_from_sun().is_some()
        || parsed.week_from_mon().is_some();
    let has_date = has_year
        || has_week
        || parsed.month().is_some()
        || parsed.day().is_some()
        || parsed.ordinal().is_some();
    let has_time = parsed.hour_div_12().is_some()
        && parsed.hour_mod_12().is_some()
        && parsed.minute().is_some();

    if has_date && !has_year {
        parsed.set_year(0)?;
    }
    if has_date && !has_week && parsed.ordinal().is_none() {
        if parsed.month().is_none() {
            parsed.set_month(1)?;
        }
        if parsed.day().is_none() {
            parsed.set_day(1)?;
        }
    }

    match (has_date, has_time, parsed.offset().is_some()) {
        (true, true, true) => parsed.to_datetime().map(drop),
        (true, true, false) => parsed.to_naive_datetime_with_offset(0).map(drop),
        (true, false, _) => parsed.to_naive_date().map(drop),
        (false, true, _) => parsed.to_naive_time().map(drop),
        (false, false, _) => Ok(()),
    }
}

// ============================================================================
// DATE RULE
// ============================================================================

/// Validates that the input parses under a [`DateLayout`].
///
/// # Examples
///
/// ```rust
/// use strand_validator::prelude::*;
///
/// let rule = date(DateLayout::Rfc3339);
/// assert!(rule.validate("2021-11-20T18:01:24.100+00:00").is_ok());
/// assert!(rule.validate("2021-11-20T18:01").unwrap_err().is(ErrorKind::InvalidDate));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateRule {
    layout: DateLayout,
}

impl DateRule {
    #[must_use]
    pub fn new(layout: DateLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &DateLayout {
        &self.layout
    }
}

impl Rule for DateRule {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.layout
            .parse(input)
            .map_err(ValidationError::invalid_date)
    }

    fn name(&self) -> &'static str {
        "date"
    }
}

/// Creates a date rule.
#[must_use]
pub fn date(layout: DateLayout) -> DateRule {
    DateRule::new(layout)
}
