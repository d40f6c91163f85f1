//! Modulo-97 check digits
//!
//! The check digits `DD` are chosen so that the number read in validation
//! order (`NNNNNNN AAAA J TR OOOO DD`) is congruent to 1 modulo 97. Twenty
//! digits overflow `u64`, so the residue is accumulated digit by digit.

use crate::codec::{CANONICAL_LENGTH, CHECK_RANGE};
use crate::error::ChecksumError;
use crate::normalize::normalize;

pub const MODULUS: u32 = 97;

/// Length of the base (canonical digits minus the check digits)
pub const BASE_LENGTH: usize = 18;

/// Residue modulo 97 of a string of ASCII digits, scanned left to right.
pub(crate) fn residue(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| (acc * 10 + u32::from(b - b'0')) % MODULUS)
}

/// Check value for an 18-digit base of ASCII digits, in `1..=98`.
pub(crate) fn check_value(base: &str) -> u8 {
    // base ++ "00"
    let remainder = residue(base) * 100 % MODULUS;
    // remainder == 0 gives 98, which is kept as-is
    (98 - remainder) as u8
}

/// Compute the two check digits for a base of
/// `sequential(7) + year(4) + segment(1) + tribunal(2) + origin_unit(4)`.
///
/// Separators are ignored; the remaining digits must number exactly 18.
///
/// # Examples
/// ```
/// use cnj_identifiers::compute_check_digits;
/// assert_eq!(compute_check_digits("000000120238260001").unwrap(), "79");
/// assert!(compute_check_digits("123").is_err());
/// ```
pub fn compute_check_digits(base18: &str) -> Result<String, ChecksumError> {
    let base = normalize(base18);
    if base.len() != BASE_LENGTH {
        return Err(ChecksumError::WrongBaseLength(base.len()));
    }
    Ok(format!("{:02}", check_value(&base)))
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn compute_check_digits_ffi(base18: String) -> Result<String, ChecksumError> {
    compute_check_digits(&base18)
}

/// Reorder canonical digits so the check digits come last.
fn validation_order(canonical: &str) -> String {
    let (sequential, rest) = canonical.split_at(CHECK_RANGE.start);
    let (check, tail) = rest.split_at(CHECK_RANGE.len());
    let mut reordered = String::with_capacity(CANONICAL_LENGTH);
    reordered.push_str(sequential);
    reordered.push_str(tail);
    reordered.push_str(check);
    reordered
}

/// Check whether `input` is a process number with a correct checksum.
///
/// The input is normalized first, so punctuated and bare forms are treated
/// alike. Anything that is not 20 digits after normalization is rejected.
/// Only the modulo-97 identity is tested; see [`crate::validate`] for the
/// detailed, rule-aware variant.
///
/// # Examples
/// ```
/// use cnj_identifiers::is_valid;
/// assert!(is_valid("0000001-79.2023.8.26.0001"));
/// assert!(is_valid("00000017920238260001"));
/// assert!(!is_valid("0000001-80.2023.8.26.0001"));
/// assert!(!is_valid("12345"));
/// ```
pub fn is_valid(input: &str) -> bool {
    let digits = normalize(input);
    if digits.len() != CANONICAL_LENGTH {
        return false;
    }
    residue(&validation_order(&digits)) == 1
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn is_valid_ffi(input: String) -> bool {
    is_valid(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residue_matches_native_arithmetic() {
        assert_eq!(residue("0"), 0);
        assert_eq!(residue("97"), 0);
        assert_eq!(residue("98"), 1);
        // Fits in u64, so compare against native modulo
        let n: u64 = 1_234_567_890_123_456_789;
        assert_eq!(u64::from(residue(&n.to_string())), n % 97);
    }

    #[test]
    fn test_reference_check_digits() {
        assert_eq!(compute_check_digits("000000120238260001").unwrap(), "79");
        assert_eq!(compute_check_digits("000000220248260100").unwrap(), "24");
    }

    #[test]
    fn test_base_with_separators() {
        assert_eq!(compute_check_digits("0000001.2023.8.26.0001").unwrap(), "79");
    }

    #[test]
    fn test_wrong_base_length() {
        assert_eq!(
            compute_check_digits("00000012023826000"),
            Err(ChecksumError::WrongBaseLength(17))
        );
        assert_eq!(
            compute_check_digits(""),
            Err(ChecksumError::WrongBaseLength(0))
        );
        assert_eq!(
            compute_check_digits("00000017920238260001"),
            Err(ChecksumError::WrongBaseLength(20))
        );
    }

    #[test]
    fn test_zero_remainder_yields_98() {
        // 000004520238260001 ++ "00" is a multiple of 97
        assert_eq!(residue("00000452023826000100"), 0);
        assert_eq!(compute_check_digits("000004520238260001").unwrap(), "98");
        assert!(is_valid("0000045-98.2023.8.26.0001"));
    }

    #[test]
    fn test_remainder_one_yields_97() {
        assert_eq!(residue("00000582023826000100"), 1);
        assert_eq!(compute_check_digits("000005820238260001").unwrap(), "97");
        assert!(is_valid("0000058-97.2023.8.26.0001"));
    }

    #[test]
    fn test_boundary_aliases_satisfy_identity() {
        // 98 and 01 are congruent mod 97
        assert!(is_valid("0000045-01.2023.8.26.0001"));
        // 97 and 00 are congruent mod 97
        assert!(is_valid("0000058-00.2023.8.26.0001"));
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("0000001-79.2023.8.26.0001"));
        assert!(is_valid("00000017920238260001"));
        assert!(is_valid("0000002-24.2024.8.26.0100"));
        assert!(!is_valid("0000001-80.2023.8.26.0001"));
        assert!(!is_valid("0000002-27.2024.8.26.0100"));
        assert!(!is_valid("12345"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_validation_order() {
        assert_eq!(
            validation_order("00000017920238260001"),
            "00000012023826000179"
        );
    }
}
