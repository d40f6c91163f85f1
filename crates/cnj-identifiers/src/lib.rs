//! CNJ judicial process numbers
//!
//! Tools for the 20-digit process identifier defined by CNJ Resolution 65/2008
//! (`NNNNNNN-DD.AAAA.J.TR.OOOO`):
//! - Normalization of free-form input to canonical digits
//! - Decomposition into fields and reassembly into the display form
//! - Modulo-97 check digit computation and validation
//! - Opt-in plausibility rules (filing year, judiciary segment)
//! - Extraction from scraped text and parallel batch validation
//!
//! ```
//! use cnj_identifiers::{compute_check_digits, format, is_valid};
//!
//! assert!(is_valid("0000001-79.2023.8.26.0001"));
//! assert_eq!(compute_check_digits("000000120238260001").unwrap(), "79");
//! assert_eq!(format("00000017920238260001").unwrap(), "0000001-79.2023.8.26.0001");
//! ```

pub mod batch;
pub mod checksum;
pub mod codec;
pub mod error;
pub mod extractors;
pub mod normalize;
pub mod number;
pub mod segment;
pub mod validators;

pub use batch::*;
pub use checksum::*;
pub use codec::*;
pub use error::*;
pub use extractors::*;
pub use normalize::*;
pub use number::*;
pub use segment::*;
pub use validators::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
