//! German license plate validation.
//!
//! A German plate has two parts:
//!
//! - the geographic identifier: one to three letters, umlauts allowed
//! - the identification: up to two letters (no umlauts) followed by one to four
//!   digits without a leading zero
//!
//! Between the two parts sit the inspection and registration stickers, which
//! people type as a space, a hyphen or nothing at all. Input is therefore
//! normalized to a hyphen-separated form before the structural match.
//!
//! Not covered, and rejected: seasonal plates, plates of official vehicles (up
//! to six digits, no letters) and historic plates with a trailing `H`.

use fieldcheck_core::{LicensePlate, LicensePlateValidator};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Whitespace as understood by the plate input fields: ASCII only.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\x0B\x0C\r]+").expect("valid whitespace regex"));

static NON_DIGIT_THEN_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^0-9])([0-9])").expect("valid separator regex"));

static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("valid hyphen regex"));

static GERMAN_PLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-ZÄÖÜ]{1,3}-[A-Z]{0,2}-?[1-9][0-9]{0,3}$").expect("valid plate regex")
});

/// Normalizes a raw German plate into its canonical hyphen-separated form.
///
/// 1. upper case: `"ka ab123"` -> `"KA AB123"`
/// 2. hyphen instead of whitespace: `"KA AB123"` -> `"KA-AB123"`
/// 3. separate letters from digits: `"KA-AB123"` -> `"KA-AB-123"`
/// 4. collapse repeated hyphens: `"KA--AB-123"` -> `"KA-AB-123"`
///
/// ```rust
/// use fieldcheck_validator::normalize;
///
/// assert_eq!(normalize("ka ab123"), "KA-AB-123");
/// assert_eq!(normalize("KA - PA 777"), "KA-PA-777");
/// ```
pub fn normalize(raw: &str) -> String {
    let upper = raw.to_uppercase();
    let hyphenated = WHITESPACE.replace_all(&upper, "-");
    let separated = NON_DIGIT_THEN_DIGIT.replace_all(&hyphenated, "${1}-${2}");
    HYPHEN_RUN.replace_all(&separated, "-").into_owned()
}

/// Validates German license plates.
///
/// Example of a valid plate: `KA PA 777`.
///
/// ```rust
/// use fieldcheck_core::{LicensePlate, LicensePlateValidator};
/// use fieldcheck_validator::GermanLicensePlateValidator;
///
/// let validator = GermanLicensePlateValidator::new();
/// assert!(validator.is_valid(&LicensePlate::new("KA PA 777")));
/// assert!(!validator.is_valid(&LicensePlate::new("ER A 55H")));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanLicensePlateValidator;

impl GermanLicensePlateValidator {
    /// Creates a new German plate validator.
    pub fn new() -> Self {
        Self
    }
}

impl LicensePlateValidator for GermanLicensePlateValidator {
    fn is_valid(&self, plate: &LicensePlate) -> bool {
        let normalized = normalize(plate.value());
        let valid = GERMAN_PLATE.is_match(&normalized);

        debug!(
            "License plate '{}' normalized to '{}': {}",
            plate,
            normalized,
            if valid { "valid" } else { "invalid" }
        );

        valid
    }
}
