//! Subcommand handlers
//!
//! Handlers write to the given sinks and return a [`Verdict`] that main
//! turns into the process exit code.

use std::fs::File;
use std::io::{BufRead, Write};
use std::path::Path;

use cnj_identifiers::{
    components, compute_check_digits, format, normalize, read_column, validate_batch,
    write_report, BatchReport, Components, RecordOutcome, ValidationRules,
};
use serde::Serialize;

/// Overall outcome of a command, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verdict {
    Valid,
    Invalid,
    Malformed,
}

impl Verdict {
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Valid => 0,
            Verdict::Invalid => 1,
            Verdict::Malformed => 2,
        }
    }

    fn of(outcome: &RecordOutcome) -> Verdict {
        if outcome.valid {
            Verdict::Valid
        } else if outcome.is_malformed() {
            Verdict::Malformed
        } else {
            Verdict::Invalid
        }
    }

    fn of_report(report: &BatchReport) -> Verdict {
        report
            .outcomes
            .iter()
            .map(Verdict::of)
            .max()
            .unwrap_or(Verdict::Valid)
    }
}

/// Non-empty trimmed lines from a reader
pub fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}

fn describe(outcome: &RecordOutcome) -> String {
    let reason = outcome.reason.as_deref().unwrap_or_default();
    match (Verdict::of(outcome), outcome.formatted.as_deref()) {
        (Verdict::Valid, Some(formatted)) => format!("VALID {formatted}"),
        (Verdict::Malformed, _) => format!("MALFORMED {} ({reason})", outcome.input),
        (_, Some(formatted)) => format!("INVALID {formatted} ({reason})"),
        (_, None) => format!("INVALID {} ({reason})", outcome.input),
    }
}

/// Validate each input and print one line per input.
pub fn check<W: Write>(
    out: &mut W,
    inputs: &[String],
    rules: &ValidationRules,
    json: bool,
) -> Result<Verdict, Box<dyn std::error::Error>> {
    let report = validate_batch(inputs, rules);
    for outcome in &report.outcomes {
        if json {
            writeln!(out, "{}", serde_json::to_string(outcome)?)?;
        } else {
            writeln!(out, "{}", describe(outcome))?;
        }
    }
    Ok(Verdict::of_report(&report))
}

/// Print the display form of a base with its computed check digits.
pub fn generate<W: Write>(out: &mut W, base18: &str) -> Result<Verdict, Box<dyn std::error::Error>> {
    let check_digits = match compute_check_digits(base18) {
        Ok(digits) => digits,
        Err(err) => {
            tracing::warn!(base = base18, error = %err, "cannot compute check digits");
            writeln!(out, "MALFORMED {base18} ({err})")?;
            return Ok(Verdict::Malformed);
        }
    };
    let base = normalize(base18);
    let (sequential, rest) = base.split_at(7);
    let formatted = format(&format!("{sequential}{check_digits}{rest}"))?;
    writeln!(out, "{formatted}")?;
    Ok(Verdict::Valid)
}

#[derive(Serialize)]
struct Rejection<'a> {
    input: &'a str,
    valid: bool,
    reason_kind: Option<&'a str>,
    reason: Option<&'a str>,
}

#[derive(Serialize)]
struct Inspection {
    #[serde(flatten)]
    components: Components,
    valid: bool,
    reason: Option<String>,
}

/// Print the components of a process number as JSON.
///
/// Input that cannot be split into fields prints a rejection object
/// with `valid: false` and the reason instead.
pub fn inspect<W: Write>(
    out: &mut W,
    input: &str,
    rules: &ValidationRules,
) -> Result<Verdict, Box<dyn std::error::Error>> {
    let report = validate_batch(&[input], rules);
    let verdict = Verdict::of_report(&report);
    let outcome = report.outcomes.first();
    let reason = outcome.and_then(|o| o.reason.as_deref());

    let json = match components(input) {
        Ok(components) => serde_json::to_string_pretty(&Inspection {
            components,
            valid: verdict == Verdict::Valid,
            reason: reason.map(str::to_string),
        })?,
        Err(err) => {
            tracing::debug!(input, error = %err, "cannot split input into fields");
            serde_json::to_string_pretty(&Rejection {
                input,
                valid: false,
                reason_kind: outcome.and_then(|o| o.reason_kind.as_deref()),
                reason,
            })?
        }
    };
    writeln!(out, "{json}")?;
    Ok(verdict)
}

/// Validate a CSV column and write the per-record report.
pub fn batch<W: Write, E: Write>(
    out: W,
    err: &mut E,
    csv_path: &Path,
    column: &str,
    rules: &ValidationRules,
) -> Result<Verdict, Box<dyn std::error::Error>> {
    let inputs = read_column(File::open(csv_path)?, column)?;
    tracing::info!(path = %csv_path.display(), records = inputs.len(), "validating CSV column");

    let report = validate_batch(&inputs, rules);
    write_report(out, &report)?;

    let summary = &report.summary;
    let invalid_ratio = if summary.total == 0 {
        0.0
    } else {
        1.0 - summary.valid_ratio
    };
    writeln!(err, "Total: {}", summary.total)?;
    writeln!(err, "Valid: {} ({:.1}%)", summary.valid, summary.valid_ratio * 100.0)?;
    writeln!(err, "Invalid: {} ({:.1}%)", summary.invalid, invalid_ratio * 100.0)?;

    Ok(Verdict::of_report(&report))
}
