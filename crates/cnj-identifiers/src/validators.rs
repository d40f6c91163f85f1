//! Rule-aware validation with specific failure reasons

use serde::{Deserialize, Serialize};

use crate::checksum::check_value;
use crate::codec::{decompose, CANONICAL_LENGTH};
use crate::error::ValidationError;
use crate::normalize::normalize;
use crate::number::ProcessNumber;
use crate::segment::Segment;

pub const DEFAULT_MIN_YEAR: u16 = 1900;
pub const DEFAULT_MAX_YEAR: u16 = 2100;

/// Optional plausibility checks layered on top of the checksum.
///
/// The default applies none of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct ValidationRules {
    /// Earliest accepted filing year
    pub min_year: Option<u16>,
    /// Latest accepted filing year
    pub max_year: Option<u16>,
    /// Reject segment digits outside 1-9
    pub require_known_segment: bool,
}

impl ValidationRules {
    /// Years 1900-2100 and segments 1-9
    pub fn strict() -> Self {
        Self {
            min_year: Some(DEFAULT_MIN_YEAR),
            max_year: Some(DEFAULT_MAX_YEAR),
            require_known_segment: true,
        }
    }

    fn check_year(&self, year: u16) -> Result<(), ValidationError> {
        let too_early = self.min_year.is_some_and(|min| year < min);
        let too_late = self.max_year.is_some_and(|max| year > max);
        if too_early || too_late {
            return Err(ValidationError::ImplausibleYear(year));
        }
        Ok(())
    }

    fn check_segment(&self, segment: u8) -> Result<(), ValidationError> {
        if self.require_known_segment && !Segment::from_digit(segment).is_known() {
            return Err(ValidationError::UnknownSegment(segment));
        }
        Ok(())
    }
}

/// Validate a process number and report why it was rejected.
///
/// Checks run in order: length, filing year, segment, check digits. The
/// check digits must equal the computed value.
///
/// # Examples
/// ```
/// use cnj_identifiers::{validate, ValidationError, ValidationRules};
///
/// let rules = ValidationRules::strict();
/// assert!(validate("0000001-79.2023.8.26.0001", &rules).is_ok());
/// assert_eq!(
///     validate("0000001-01.1800.8.00.0001", &rules),
///     Err(ValidationError::ImplausibleYear(1800))
/// );
/// ```
pub fn validate(input: &str, rules: &ValidationRules) -> Result<ProcessNumber, ValidationError> {
    let digits = normalize(input);
    if digits.len() != CANONICAL_LENGTH {
        return Err(ValidationError::WrongLength(digits.len()));
    }
    let fields = decompose(&digits).map_err(|_| ValidationError::WrongLength(digits.len()))?;

    rules.check_year(fields.year)?;
    rules.check_segment(fields.segment)?;

    let base = fields
        .base()
        .map_err(|_| ValidationError::WrongLength(digits.len()))?;
    let expected = check_value(&base);
    if fields.check_digits != expected {
        return Err(ValidationError::ChecksumMismatch {
            expected: format!("{:02}", expected),
            found: format!("{:02}", fields.check_digits),
        });
    }

    Ok(ProcessNumber::from_verified(fields))
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn validate_ffi(input: String, rules: ValidationRules) -> Result<String, ValidationError> {
    validate(&input, &rules).map(|number| number.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        let rules = ValidationRules::default();
        assert!(validate("0000001-79.2023.8.26.0001", &rules).is_ok());
        assert!(validate("00000017920238260001", &rules).is_ok());
        assert!(validate("0000002-24.2024.8.26.0100", &rules).is_ok());
    }

    #[test]
    fn test_wrong_length() {
        let rules = ValidationRules::default();
        assert_eq!(
            validate("0000001-01.2024.8.00.001", &rules),
            Err(ValidationError::WrongLength(19))
        );
        assert_eq!(validate("", &rules), Err(ValidationError::WrongLength(0)));
    }

    #[test]
    fn test_checksum_mismatch_reports_both_values() {
        let err = validate("0000002-27.2024.8.26.0100", &ValidationRules::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ChecksumMismatch {
                expected: "24".to_string(),
                found: "27".to_string(),
            }
        );
    }

    #[test]
    fn test_baseline_ignores_year_and_segment() {
        // Year 1800, segment 0, check digits computed for that base
        let number = ProcessNumber::from_parts(1, 1800, 0, 0, 1).unwrap();
        let input = number.to_string();
        assert!(validate(&input, &ValidationRules::default()).is_ok());
        assert_eq!(
            validate(&input, &ValidationRules::strict()),
            Err(ValidationError::ImplausibleYear(1800))
        );
    }

    #[test]
    fn test_strict_rejects_unknown_segment() {
        let number = ProcessNumber::from_parts(1, 2023, 0, 26, 1).unwrap();
        assert_eq!(
            validate(&number.to_string(), &ValidationRules::strict()),
            Err(ValidationError::UnknownSegment(0))
        );
    }

    #[test]
    fn test_year_checked_before_checksum() {
        // Bad year and bad check digits: the year is reported
        assert_eq!(
            validate("0000001-99.2101.8.00.0001", &ValidationRules::strict()),
            Err(ValidationError::ImplausibleYear(2101))
        );
    }

    #[test]
    fn test_open_ended_bounds() {
        let rules = ValidationRules {
            min_year: Some(2000),
            ..Default::default()
        };
        let old = ProcessNumber::from_parts(1, 1999, 8, 26, 1).unwrap();
        let future = ProcessNumber::from_parts(1, 9999, 8, 26, 1).unwrap();
        assert!(validate(&old.to_string(), &rules).is_err());
        assert!(validate(&future.to_string(), &rules).is_ok());
    }

    #[test]
    fn test_rules_deserialize_with_defaults() {
        let rules: ValidationRules = serde_json::from_str(r#"{"min_year": 1950}"#).unwrap();
        assert_eq!(rules.min_year, Some(1950));
        assert_eq!(rules.max_year, None);
        assert!(!rules.require_known_segment);
    }
}
