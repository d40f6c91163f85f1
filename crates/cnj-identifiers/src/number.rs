//! The `ProcessNumber` value type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::checksum::check_value;
use crate::codec::{assemble, decompose, Fields};
use crate::error::{FormatError, ValidationError};
use crate::segment::Segment;
use crate::validators::{validate, ValidationRules};

/// A process number whose check digits match its other fields.
///
/// Immutable; serializes as the display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessNumber {
    fields: Fields,
}

/// Flattened view of a process number, for reports and JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Components {
    pub sequential: String,
    pub check_digits: String,
    pub year: String,
    pub segment: String,
    pub segment_name: String,
    pub tribunal: String,
    pub origin_unit: String,
    pub formatted: String,
}

impl ProcessNumber {
    /// Parse and verify a process number with the baseline rules.
    ///
    /// Unlike [`crate::is_valid`], the check digits must equal the computed
    /// value exactly, so congruent aliases such as `00` for `97` are rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        validate(input, &ValidationRules::default())
    }

    /// Build a process number from its fields, computing the check digits.
    pub fn from_parts(
        sequential: u32,
        year: u16,
        segment: u8,
        tribunal: u8,
        origin_unit: u16,
    ) -> Result<Self, FormatError> {
        let mut fields = Fields {
            sequential,
            check_digits: 0,
            year,
            segment,
            tribunal,
            origin_unit,
        };
        fields.check_digits = check_value(&fields.base()?);
        Ok(Self { fields })
    }

    /// Wrap fields already known to carry the computed check digits.
    pub(crate) fn from_verified(fields: Fields) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> Fields {
        self.fields
    }

    pub fn sequential(&self) -> u32 {
        self.fields.sequential
    }

    pub fn check_digits(&self) -> u8 {
        self.fields.check_digits
    }

    pub fn year(&self) -> u16 {
        self.fields.year
    }

    pub fn segment(&self) -> Segment {
        Segment::from_digit(self.fields.segment)
    }

    pub fn tribunal(&self) -> u8 {
        self.fields.tribunal
    }

    pub fn origin_unit(&self) -> u16 {
        self.fields.origin_unit
    }

    /// Canonical 20-digit form
    pub fn digits(&self) -> String {
        self.fields.write_canonical()
    }

    /// 18-digit base used for check digit computation
    pub fn base(&self) -> String {
        self.fields.write_base()
    }

    pub fn components(&self) -> Components {
        labelled(&self.fields, self.to_string())
    }
}

impl fmt::Display for ProcessNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Widths are guaranteed by construction
        match assemble(&self.fields) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl FromStr for ProcessNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ProcessNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProcessNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn labelled(fields: &Fields, formatted: String) -> Components {
    Components {
        sequential: format!("{:07}", fields.sequential),
        check_digits: format!("{:02}", fields.check_digits),
        year: format!("{:04}", fields.year),
        segment: fields.segment.to_string(),
        segment_name: Segment::from_digit(fields.segment).name().to_string(),
        tribunal: format!("{:02}", fields.tribunal),
        origin_unit: format!("{:04}", fields.origin_unit),
        formatted,
    }
}

/// Decompose a process number into labelled components without checking
/// its check digits.
pub fn components(input: &str) -> Result<Components, FormatError> {
    let fields = decompose(input)?;
    let formatted = assemble(&fields)?;
    Ok(labelled(&fields, formatted))
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn components_ffi(input: String) -> Result<Components, FormatError> {
    components(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let number: ProcessNumber = "00000017920238260001".parse().unwrap();
        assert_eq!(number.to_string(), "0000001-79.2023.8.26.0001");
        assert_eq!(number.digits(), "00000017920238260001");
        assert_eq!(number.base(), "000000120238260001");
        assert_eq!(number.segment(), Segment::StateJustice);
    }

    #[test]
    fn test_parse_rejects_bad_check_digits() {
        assert_eq!(
            ProcessNumber::parse("0000001-80.2023.8.26.0001"),
            Err(ValidationError::ChecksumMismatch {
                expected: "79".to_string(),
                found: "80".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_rejects_congruent_alias() {
        // 00 satisfies the residue identity but 97 is the computed value
        assert!(crate::is_valid("0000058-00.2023.8.26.0001"));
        assert!(ProcessNumber::parse("0000058-00.2023.8.26.0001").is_err());
        assert!(ProcessNumber::parse("0000058-97.2023.8.26.0001").is_ok());
    }

    #[test]
    fn test_from_parts() {
        let number = ProcessNumber::from_parts(2, 2024, 8, 26, 100).unwrap();
        assert_eq!(number.check_digits(), 24);
        assert_eq!(number.to_string(), "0000002-24.2024.8.26.0100");
    }

    #[test]
    fn test_digits_and_base_match_codec() {
        let number = ProcessNumber::from_parts(2, 2024, 8, 26, 100).unwrap();
        assert_eq!(number.digits(), "00000022420248260100");
        assert_eq!(number.base(), "000000220248260100");
        assert_eq!(number.digits(), number.fields().canonical().unwrap());
        assert_eq!(number.base(), number.fields().base().unwrap());
    }

    #[test]
    fn test_from_parts_overflow() {
        assert!(matches!(
            ProcessNumber::from_parts(1, 20231, 8, 26, 1),
            Err(FormatError::Overflow { field: "year", .. })
        ));
    }

    #[test]
    fn test_components() {
        let c = components("0000001-79.2023.8.26.0001").unwrap();
        assert_eq!(c.sequential, "0000001");
        assert_eq!(c.check_digits, "79");
        assert_eq!(c.year, "2023");
        assert_eq!(c.segment, "8");
        assert_eq!(c.segment_name, "State/Federal-District Justice");
        assert_eq!(c.tribunal, "26");
        assert_eq!(c.origin_unit, "0001");
        assert_eq!(c.formatted, "0000001-79.2023.8.26.0001");
    }

    #[test]
    fn test_components_unknown_segment() {
        let c = components("00000017920230260001").unwrap();
        assert_eq!(c.segment, "0");
        assert_eq!(c.segment_name, "Unknown");
    }

    #[test]
    fn test_serde_as_display_string() {
        let number = ProcessNumber::parse("00000022420248260100").unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"0000002-24.2024.8.26.0100\"");

        let back: ProcessNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, number);

        assert!(serde_json::from_str::<ProcessNumber>("\"0000002-27.2024.8.26.0100\"").is_err());
    }
}
