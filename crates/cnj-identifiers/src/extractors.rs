//! Process number extraction from text

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::checksum::is_valid;
use crate::codec::format;

/// Process number found in text, with byte offsets of the match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ExtractedProcessNumber {
    /// Matched text as it appears in the input
    pub raw: String,
    /// Display form `NNNNNNN-DD.AAAA.J.TR.OOOO`
    pub value: String,
    pub start_index: u32,
    pub end_index: u32,
}

lazy_static! {
    // NNNNNNN-DD.AAAA.J.TR.OOOO with every separator optional. ASCII word
    // boundaries, so "nº0000001-..." still matches.
    static ref PROCESS_NUMBER_REGEX: Regex = Regex::new(
        r"(?-u:\b)(?P<cnj>[0-9]{7}-?[0-9]{2}\.?[0-9]{4}\.?[0-9]\.?[0-9]{2}\.?[0-9]{4})(?-u:\b)"
    ).unwrap();
}

/// Find everything shaped like a process number, valid or not.
///
/// Useful for data-cleansing reports where rejected candidates matter.
pub fn find_candidates(text: &str) -> Vec<ExtractedProcessNumber> {
    PROCESS_NUMBER_REGEX
        .captures_iter(text)
        .filter_map(|cap| cap.name("cnj"))
        .filter_map(|m| {
            let value = format(m.as_str()).ok()?;
            Some(ExtractedProcessNumber {
                raw: m.as_str().to_string(),
                value,
                start_index: m.start() as u32,
                end_index: m.end() as u32,
            })
        })
        .collect()
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn find_candidates_ffi(text: String) -> Vec<ExtractedProcessNumber> {
    find_candidates(&text)
}

/// Extract process numbers with a valid checksum, sorted by position.
///
/// # Examples
/// ```
/// use cnj_identifiers::extract_process_numbers;
/// let found = extract_process_numbers("Autos nº 0000001-79.2023.8.26.0001, fls. 12");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].value, "0000001-79.2023.8.26.0001");
/// ```
pub fn extract_process_numbers(text: &str) -> Vec<ExtractedProcessNumber> {
    let mut results: Vec<ExtractedProcessNumber> = find_candidates(text)
        .into_iter()
        .filter(|candidate| {
            let valid = is_valid(&candidate.raw);
            if !valid {
                tracing::debug!(candidate = %candidate.raw, "discarding candidate with bad check digits");
            }
            valid
        })
        .collect();

    results.sort_by_key(|r| r.start_index);
    results
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn extract_process_numbers_ffi(text: String) -> Vec<ExtractedProcessNumber> {
    extract_process_numbers(&text)
}

/// Extract only the display forms, without duplicates, in order of appearance
pub fn extract_unique(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    extract_process_numbers(text)
        .into_iter()
        .map(|found| found.value)
        .filter(|value| seen.insert(value.clone()))
        .collect()
}
