//! Validator traits.
//!
//! Each trait describes one capability. Concrete validators are selected by the
//! caller (per country, per policy) and used through these traits, usually as
//! trait objects.

use crate::{ContactInformation, LicensePlate, ValidationResult};

/// Checks whether a license plate is well-formed for a particular country.
///
/// # Example
///
/// ```rust
/// use fieldcheck_core::{LicensePlate, LicensePlateValidator};
///
/// struct NonEmpty;
///
/// impl LicensePlateValidator for NonEmpty {
///     fn is_valid(&self, plate: &LicensePlate) -> bool {
///         !plate.value().trim().is_empty()
///     }
/// }
///
/// assert!(NonEmpty.is_valid_str("KA PA 777"));
/// assert!(!NonEmpty.is_valid_str("  "));
/// ```
pub trait LicensePlateValidator: Send + Sync {
    /// Returns `true` if the plate matches the expected format.
    ///
    /// Malformed input yields `false`; implementations never panic.
    fn is_valid(&self, plate: &LicensePlate) -> bool;

    /// Validates a raw string.
    ///
    /// Default implementation wraps the string and delegates to `is_valid()`.
    fn is_valid_str(&self, plate: &str) -> bool {
        self.is_valid(&LicensePlate::new(plate))
    }
}

/// Checks which required fields of a contact record are missing.
pub trait CompletenessValidator: Send + Sync {
    /// Returns the findings in detection order. An empty vector means the record
    /// is complete.
    fn check_completeness(&self, info: &ContactInformation) -> Vec<ValidationResult>;

    /// Returns `true` if the record has no findings.
    fn is_complete(&self, info: &ContactInformation) -> bool {
        self.check_completeness(info).is_empty()
    }
}
