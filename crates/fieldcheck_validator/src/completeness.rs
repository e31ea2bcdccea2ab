//! Completeness checks for contact information.
//!
//! A field is missing when it is unset or empty. Whitespace-only values count
//! as present; checking the content's format is not the job of these checks.

use fieldcheck_core::{CompletenessValidator, ContactInformation, ValidationResult};
use tracing::debug;

/// Completeness policy for internal users: an email address is required.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternalUserCompletenessValidator;

impl InternalUserCompletenessValidator {
    /// Creates a new internal user completeness validator.
    pub fn new() -> Self {
        Self
    }
}

impl CompletenessValidator for InternalUserCompletenessValidator {
    fn check_completeness(&self, info: &ContactInformation) -> Vec<ValidationResult> {
        let mut results = Vec::new();

        // No mobile check: an empty result together with other incompleteness
        // makes the caller fall back to its generic message.
        if !info.has_email() {
            results.push(ValidationResult::MissingEmail);
        }

        debug!("Internal user completeness check: {} finding(s)", results.len());
        results
    }
}

/// Completeness policy requiring both an email address and a mobile number.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactCompletenessValidator;

impl ContactCompletenessValidator {
    /// Creates a new contact completeness validator.
    pub fn new() -> Self {
        Self
    }
}

impl CompletenessValidator for ContactCompletenessValidator {
    fn check_completeness(&self, info: &ContactInformation) -> Vec<ValidationResult> {
        let mut results = Vec::new();

        if !info.has_email() {
            results.push(ValidationResult::MissingEmail);
        }

        if !info.has_mobile_number() {
            results.push(ValidationResult::MissingMobile);
        }

        debug!("Contact completeness check: {} finding(s)", results.len());
        results
    }
}
