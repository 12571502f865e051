//! Identifier parseability (UUID)

use crate::foundation::{Rule, ValidationError};
use uuid::Uuid;

/// Validates that the input parses as a UUID.
///
/// Accepts every textual form the `uuid` crate parses: hyphenated
/// (`4b9e7348-bdda-4584-88c1-a1e9ac4c6595`), simple (32 hex digits), braced
/// (`{...}`) and URN (`urn:uuid:...`). Hex digits are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UuidRule;

impl Rule for UuidRule {
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        Uuid::try_parse(input)
            .map(drop)
            .map_err(ValidationError::invalid_uuid)
    }

    fn name(&self) -> &'static str {
        "uuid"
    }
}

/// Creates a UUID rule.
#[must_use]
pub const fn uuid() -> UuidRule {
    UuidRule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case::hyphenated("4b9e7348-bdda-4584-88c1-a1e9ac4c6595")]
    #[case::uppercase("4B9E7348-BDDA-4584-88C1-A1E9AC4C6595")]
    #[case::simple("4b9e7348bdda458488c1a1e9ac4c6595")]
    #[case::braced("{4b9e7348-bdda-4584-88c1-a1e9ac4c6595}")]
    #[case::urn("urn:uuid:4b9e7348-bdda-4584-88c1-a1e9ac4c6595")]
    #[case::nil("00000000-0000-0000-0000-000000000000")]
    fn test_parseable(#[case] input: &str) {
        assert!(uuid().validate(input).is_ok());
    }

    #[rstest]
    #[case::too_short("123")]
    #[case::bad_digit("4b9e7348-bdda-4584-88c1-a1e9ac4c659g")]
    #[case::misplaced_hyphen("4b9e734-8bdda-4584-88c1-a1e9ac4c6595")]
    fn test_not_parseable(#[case] input: &str) {
        let err = uuid().validate(input).unwrap_err();
        assert!(err.is(ErrorKind::InvalidUuid));
        assert!(err.to_string().starts_with("should be a parseable uuid string, "));
    }

    #[test]
    fn test_generated_uuid() {
        let id = Uuid::new_v4().to_string();
        assert!(uuid().validate(&id).is_ok());
    }
}
