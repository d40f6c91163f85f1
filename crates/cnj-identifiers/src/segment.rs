//! Judiciary segments (the `J` field)

use serde::{Deserialize, Serialize};

/// Branch of the judiciary that issued a process number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Segment {
    /// 1 - Supremo Tribunal Federal
    SupremeCourt,
    /// 2 - Conselho Nacional de Justiça
    NationalCouncilOfJustice,
    /// 3 - Superior Tribunal de Justiça
    SuperiorCourtOfJustice,
    /// 4 - Justiça Federal
    FederalJustice,
    /// 5 - Justiça do Trabalho
    LaborJustice,
    /// 6 - Justiça Eleitoral
    ElectoralJustice,
    /// 7 - Justiça Militar da União
    MilitaryJusticeOfTheUnion,
    /// 8 - Justiça dos Estados e do Distrito Federal
    StateJustice,
    /// 9 - Justiça Militar Estadual
    StateMilitaryJustice,
    /// Any other digit
    Unknown,
}

/// Name returned for digits outside 1-9
pub const UNKNOWN_SEGMENT_NAME: &str = "Unknown";

impl Segment {
    /// All known segments, in digit order
    pub fn all() -> &'static [Segment] {
        &[
            Segment::SupremeCourt,
            Segment::NationalCouncilOfJustice,
            Segment::SuperiorCourtOfJustice,
            Segment::FederalJustice,
            Segment::LaborJustice,
            Segment::ElectoralJustice,
            Segment::MilitaryJusticeOfTheUnion,
            Segment::StateJustice,
            Segment::StateMilitaryJustice,
        ]
    }

    pub fn from_digit(digit: u8) -> Segment {
        match digit {
            1 => Segment::SupremeCourt,
            2 => Segment::NationalCouncilOfJustice,
            3 => Segment::SuperiorCourtOfJustice,
            4 => Segment::FederalJustice,
            5 => Segment::LaborJustice,
            6 => Segment::ElectoralJustice,
            7 => Segment::MilitaryJusticeOfTheUnion,
            8 => Segment::StateJustice,
            9 => Segment::StateMilitaryJustice,
            _ => Segment::Unknown,
        }
    }

    pub fn from_char(c: char) -> Segment {
        c.to_digit(10)
            .map(|d| Segment::from_digit(d as u8))
            .unwrap_or(Segment::Unknown)
    }

    /// The digit for this segment, `None` for `Unknown`
    pub fn digit(self) -> Option<u8> {
        match self {
            Segment::SupremeCourt => Some(1),
            Segment::NationalCouncilOfJustice => Some(2),
            Segment::SuperiorCourtOfJustice => Some(3),
            Segment::FederalJustice => Some(4),
            Segment::LaborJustice => Some(5),
            Segment::ElectoralJustice => Some(6),
            Segment::MilitaryJusticeOfTheUnion => Some(7),
            Segment::StateJustice => Some(8),
            Segment::StateMilitaryJustice => Some(9),
            Segment::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        self != Segment::Unknown
    }

    /// English display name
    pub fn name(self) -> &'static str {
        match self {
            Segment::SupremeCourt => "Supreme Court",
            Segment::NationalCouncilOfJustice => "National Council of Justice",
            Segment::SuperiorCourtOfJustice => "Superior Court of Justice",
            Segment::FederalJustice => "Federal Justice",
            Segment::LaborJustice => "Labor Justice",
            Segment::ElectoralJustice => "Electoral Justice",
            Segment::MilitaryJusticeOfTheUnion => "Military Justice of the Union",
            Segment::StateJustice => "State/Federal-District Justice",
            Segment::StateMilitaryJustice => "State Military Justice",
            Segment::Unknown => UNKNOWN_SEGMENT_NAME,
        }
    }

    /// Name as written in the numbering resolution
    pub fn official_name(self) -> &'static str {
        match self {
            Segment::SupremeCourt => "Supremo Tribunal Federal",
            Segment::NationalCouncilOfJustice => "Conselho Nacional de Justiça",
            Segment::SuperiorCourtOfJustice => "Superior Tribunal de Justiça",
            Segment::FederalJustice => "Justiça Federal",
            Segment::LaborJustice => "Justiça do Trabalho",
            Segment::ElectoralJustice => "Justiça Eleitoral",
            Segment::MilitaryJusticeOfTheUnion => "Justiça Militar da União",
            Segment::StateJustice => "Justiça dos Estados e do Distrito Federal",
            Segment::StateMilitaryJustice => "Justiça Militar Estadual",
            Segment::Unknown => "Desconhecido",
        }
    }
}

/// Look up the name of the judiciary segment for a single digit.
///
/// Digits outside 1-9 and non-digit characters map to `"Unknown"`.
pub fn segment_name(segment_digit: char) -> &'static str {
    Segment::from_char(segment_digit).name()
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn segment_name_ffi(segment_digit: String) -> String {
    segment_digit
        .chars()
        .next()
        .map(segment_name)
        .unwrap_or(UNKNOWN_SEGMENT_NAME)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_names() {
        assert_eq!(segment_name('1'), "Supreme Court");
        assert_eq!(segment_name('5'), "Labor Justice");
        assert_eq!(segment_name('8'), "State/Federal-District Justice");
        assert_eq!(segment_name('9'), "State Military Justice");
    }

    #[test]
    fn test_unknown_segments() {
        assert_eq!(segment_name('0'), "Unknown");
        assert_eq!(segment_name('x'), "Unknown");
        assert_eq!(segment_name('-'), "Unknown");
        assert_eq!(Segment::from_digit(10), Segment::Unknown);
    }

    #[test]
    fn test_digit_roundtrip() {
        for (i, segment) in Segment::all().iter().enumerate() {
            assert_eq!(segment.digit(), Some(i as u8 + 1));
            assert_eq!(Segment::from_digit(i as u8 + 1), *segment);
            assert!(segment.is_known());
        }
        assert_eq!(Segment::Unknown.digit(), None);
    }

    #[test]
    fn test_official_name() {
        assert_eq!(
            Segment::StateJustice.official_name(),
            "Justiça dos Estados e do Distrito Federal"
        );
        assert_eq!(Segment::Unknown.official_name(), "Desconhecido");
    }
}
