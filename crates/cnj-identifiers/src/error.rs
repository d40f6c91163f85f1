//! Error types for process number handling

use thiserror::Error;

/// Structural errors raised while splitting or assembling a process number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum FormatError {
    /// Canonical form must be exactly 20 digits
    #[error("process number must have 20 digits (has {0})")]
    WrongLength(usize),

    /// A numeric field does not fit in its fixed width
    #[error("{field} value {value} does not fit in {width} digits")]
    Overflow {
        field: &'static str,
        value: u32,
        width: usize,
    },
}

/// Errors raised while computing check digits
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum ChecksumError {
    /// The base (number without check digits) must be exactly 18 digits
    #[error("base must have 18 digits (has {0})")]
    WrongBaseLength(usize),
}

/// Reason a process number was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum ValidationError {
    #[error("process number must have 20 digits (has {0})")]
    WrongLength(usize),

    #[error("check digits mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: String, found: String },

    #[error("implausible filing year: {0}")]
    ImplausibleYear(u16),

    #[error("unknown judiciary segment: {0}")]
    UnknownSegment(u8),
}

impl ValidationError {
    /// Short machine-readable tag for reports
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::WrongLength(_) => "wrong_length",
            ValidationError::ChecksumMismatch { .. } => "checksum_mismatch",
            ValidationError::ImplausibleYear(_) => "implausible_year",
            ValidationError::UnknownSegment(_) => "unknown_segment",
        }
    }

    /// Whether the input could not even be split into fields
    pub fn is_malformed(&self) -> bool {
        matches!(self, ValidationError::WrongLength(_))
    }
}

/// Errors raised by CSV batch validation
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("column not found: {0}")]
    MissingColumn(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
