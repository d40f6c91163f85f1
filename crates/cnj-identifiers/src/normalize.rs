//! Input normalization

/// Keep only ASCII decimal digits, in their original order.
///
/// Separators and any other characters are dropped. Length is not checked
/// here; a result of any length (including empty) is returned.
///
/// # Examples
/// ```
/// use cnj_identifiers::normalize;
/// assert_eq!(normalize("0000001-79.2023.8.26.0001"), "00000017920238260001");
/// assert_eq!(normalize("n/a"), "");
/// ```
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn normalize_ffi(input: String) -> String {
    normalize(&input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_separators() {
        assert_eq!(
            normalize("0000001-79.2023.8.26.0001"),
            "00000017920238260001"
        );
        assert_eq!(
            normalize("0000001 79 2023 8 26 0001"),
            "00000017920238260001"
        );
    }

    #[test]
    fn test_drops_arbitrary_characters() {
        assert_eq!(normalize("Processo nº 12a3-4"), "1234");
        assert_eq!(normalize("\t\n"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_non_ascii_digits_are_dropped() {
        // Arabic-Indic and fullwidth digits are not ASCII
        assert_eq!(normalize("١٢٣１２３7"), "7");
    }
}
