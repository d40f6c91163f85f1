//! Splitting and assembling process numbers
//!
//! Canonical layout, left to right:
//!
//! | field        | width |
//! |--------------|-------|
//! | sequential   | 7     |
//! | check digits | 2     |
//! | year         | 4     |
//! | segment      | 1     |
//! | tribunal     | 2     |
//! | origin unit  | 4     |
//!
//! Display form: `NNNNNNN-DD.AAAA.J.TR.OOOO` (25 characters).

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::normalize::normalize;

pub const CANONICAL_LENGTH: usize = 20;
pub const DISPLAY_LENGTH: usize = 25;

pub const SEQUENTIAL_RANGE: Range<usize> = 0..7;
pub const CHECK_RANGE: Range<usize> = 7..9;
pub const YEAR_RANGE: Range<usize> = 9..13;
pub const SEGMENT_RANGE: Range<usize> = 13..14;
pub const TRIBUNAL_RANGE: Range<usize> = 14..16;
pub const ORIGIN_RANGE: Range<usize> = 16..20;

/// The six fixed-width fields of a process number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Fields {
    pub sequential: u32,
    pub check_digits: u8,
    pub year: u16,
    pub segment: u8,
    pub tribunal: u8,
    pub origin_unit: u16,
}

fn digits_value(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

fn ensure_width(field: &'static str, value: u32, width: usize) -> Result<(), FormatError> {
    if u64::from(value) < 10u64.pow(width as u32) {
        Ok(())
    } else {
        Err(FormatError::Overflow {
            field,
            value,
            width,
        })
    }
}

impl Fields {
    /// Check that every field fits its declared width
    pub fn check_widths(&self) -> Result<(), FormatError> {
        ensure_width("sequential", self.sequential, SEQUENTIAL_RANGE.len())?;
        ensure_width("check_digits", self.check_digits.into(), CHECK_RANGE.len())?;
        ensure_width("year", self.year.into(), YEAR_RANGE.len())?;
        ensure_width("segment", self.segment.into(), SEGMENT_RANGE.len())?;
        ensure_width("tribunal", self.tribunal.into(), TRIBUNAL_RANGE.len())?;
        ensure_width("origin_unit", self.origin_unit.into(), ORIGIN_RANGE.len())?;
        Ok(())
    }

    /// The 18-digit base: every field except the check digits
    pub fn base(&self) -> Result<String, FormatError> {
        self.check_widths()?;
        Ok(self.write_base())
    }

    /// The 20-digit canonical form
    pub fn canonical(&self) -> Result<String, FormatError> {
        self.check_widths()?;
        Ok(self.write_canonical())
    }

    /// Zero-padded base; widths must already be checked
    pub(crate) fn write_base(&self) -> String {
        format!(
            "{:07}{:04}{}{:02}{:04}",
            self.sequential, self.year, self.segment, self.tribunal, self.origin_unit
        )
    }

    /// Zero-padded canonical form; widths must already be checked
    pub(crate) fn write_canonical(&self) -> String {
        format!(
            "{:07}{:02}{:04}{}{:02}{:04}",
            self.sequential,
            self.check_digits,
            self.year,
            self.segment,
            self.tribunal,
            self.origin_unit
        )
    }
}

/// Split a process number into its six fields.
///
/// Separators are ignored; exactly 20 digits must remain. Neither the
/// checksum nor field ranges are checked.
///
/// # Examples
/// ```
/// use cnj_identifiers::decompose;
/// let fields = decompose("00000017920238260001").unwrap();
/// assert_eq!(fields.check_digits, 79);
/// assert_eq!(fields.tribunal, 26);
/// ```
pub fn decompose(canonical: &str) -> Result<Fields, FormatError> {
    let digits = normalize(canonical);
    if digits.len() != CANONICAL_LENGTH {
        return Err(FormatError::WrongLength(digits.len()));
    }

    Ok(Fields {
        sequential: digits_value(&digits[SEQUENTIAL_RANGE]),
        check_digits: digits_value(&digits[CHECK_RANGE]) as u8,
        year: digits_value(&digits[YEAR_RANGE]) as u16,
        segment: digits_value(&digits[SEGMENT_RANGE]) as u8,
        tribunal: digits_value(&digits[TRIBUNAL_RANGE]) as u8,
        origin_unit: digits_value(&digits[ORIGIN_RANGE]) as u16,
    })
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn decompose_ffi(canonical: String) -> Result<Fields, FormatError> {
    decompose(&canonical)
}

/// Assemble fields into the display form `NNNNNNN-DD.AAAA.J.TR.OOOO`.
///
/// Fields are zero-padded; a value wider than its field is an
/// [`FormatError::Overflow`].
pub fn assemble(fields: &Fields) -> Result<String, FormatError> {
    fields.check_widths()?;
    Ok(format!(
        "{:07}-{:02}.{:04}.{}.{:02}.{:04}",
        fields.sequential,
        fields.check_digits,
        fields.year,
        fields.segment,
        fields.tribunal,
        fields.origin_unit
    ))
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn assemble_ffi(fields: Fields) -> Result<String, FormatError> {
    assemble(&fields)
}

/// Format a process number in the display form.
///
/// # Examples
/// ```
/// use cnj_identifiers::format;
/// assert_eq!(format("00000017920238260001").unwrap(), "0000001-79.2023.8.26.0001");
/// ```
pub fn format(digits20: &str) -> Result<String, FormatError> {
    assemble(&decompose(digits20)?)
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn format_ffi(digits20: String) -> Result<String, FormatError> {
    format(&digits20)
}
