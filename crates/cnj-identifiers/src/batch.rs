//! Batch validation over collections and CSV exports
//!
//! Each record is validated independently, so batches are split across the
//! rayon thread pool. Outcomes keep the input order.

use std::io::{Read, Write};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::codec::format;
use crate::error::BatchError;
use crate::validators::{validate, ValidationRules};

/// Column read from spreadsheet exports when none is given
pub const DEFAULT_COLUMN: &str = "numero_processo";

/// Validation result for a single record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct RecordOutcome {
    /// 1-based position in the input
    pub row: u32,
    pub input: String,
    /// Display form, when the input has 20 digits
    pub formatted: Option<String>,
    pub valid: bool,
    /// Short tag of the failure (`wrong_length`, `checksum_mismatch`, ...)
    pub reason_kind: Option<String>,
    /// Human-readable failure description
    pub reason: Option<String>,
}

impl RecordOutcome {
    /// Input could not be split into fields at all
    pub fn is_malformed(&self) -> bool {
        self.reason_kind.as_deref() == Some("wrong_length")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct BatchSummary {
    pub total: u32,
    pub valid: u32,
    pub invalid: u32,
    /// Share of valid records in `0.0..=1.0`; 0 for an empty batch
    pub valid_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct BatchReport {
    pub outcomes: Vec<RecordOutcome>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn invalid(&self) -> impl Iterator<Item = &RecordOutcome> {
        self.outcomes.iter().filter(|o| !o.valid)
    }
}

fn validate_record(row: usize, input: &str, rules: &ValidationRules) -> RecordOutcome {
    let formatted = format(input).ok();
    match validate(input, rules) {
        Ok(number) => RecordOutcome {
            row: row as u32,
            input: input.to_string(),
            formatted: Some(number.to_string()),
            valid: true,
            reason_kind: None,
            reason: None,
        },
        Err(err) => {
            tracing::debug!(row, input, reason = %err, "rejected process number");
            RecordOutcome {
                row: row as u32,
                input: input.to_string(),
                formatted,
                valid: false,
                reason_kind: Some(err.kind().to_string()),
                reason: Some(err.to_string()),
            }
        }
    }
}

/// Validate every input in parallel and summarize the results.
pub fn validate_batch<S>(inputs: &[S], rules: &ValidationRules) -> BatchReport
where
    S: AsRef<str> + Sync,
{
    let outcomes: Vec<RecordOutcome> = inputs
        .par_iter()
        .enumerate()
        .map(|(i, input)| validate_record(i + 1, input.as_ref(), rules))
        .collect();

    let total = outcomes.len() as u32;
    let valid = outcomes.iter().filter(|o| o.valid).count() as u32;
    let summary = BatchSummary {
        total,
        valid,
        invalid: total - valid,
        valid_ratio: if total == 0 {
            0.0
        } else {
            f64::from(valid) / f64::from(total)
        },
    };

    tracing::info!(
        total = summary.total,
        valid = summary.valid,
        invalid = summary.invalid,
        "batch validation finished"
    );

    BatchReport { outcomes, summary }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn validate_batch_ffi(inputs: Vec<String>, rules: ValidationRules) -> BatchReport {
    validate_batch(&inputs, &rules)
}

/// Read one column of a CSV file with a header row.
pub fn read_column<R: Read>(reader: R, column: &str) -> Result<Vec<String>, BatchError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let index = csv_reader
        .headers()?
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| BatchError::MissingColumn(column.to_string()))?;

    let mut values = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        values.push(record.get(index).unwrap_or_default().to_string());
    }
    Ok(values)
}

#[derive(Serialize)]
struct ReportRow<'a> {
    row: u32,
    input: &'a str,
    formatted: &'a str,
    valid: bool,
    reason_kind: &'a str,
    reason: &'a str,
}

/// Write the per-record outcomes as CSV.
pub fn write_report<W: Write>(writer: W, report: &BatchReport) -> Result<(), BatchError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for outcome in &report.outcomes {
        csv_writer.serialize(ReportRow {
            row: outcome.row,
            input: &outcome.input,
            formatted: outcome.formatted.as_deref().unwrap_or_default(),
            valid: outcome.valid,
            reason_kind: outcome.reason_kind.as_deref().unwrap_or_default(),
            reason: outcome.reason.as_deref().unwrap_or_default(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
