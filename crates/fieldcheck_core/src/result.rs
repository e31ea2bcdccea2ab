//! Findings reported by completeness checks.

use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single finding of a completeness check.
///
/// Findings carry no payload. Callers map them to user-facing text, either via
/// [`ValidationResult::message`] or their own localized messages keyed by
/// [`ValidationResult::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationResult {
    /// No email address is set
    MissingEmail,

    /// No mobile number is set
    MissingMobile,

    /// Contact information is missing altogether
    MissingContactInfoGeneric,
}

impl ValidationResult {
    /// All variants, in declaration order.
    pub const ALL: [ValidationResult; 3] = [
        ValidationResult::MissingEmail,
        ValidationResult::MissingMobile,
        ValidationResult::MissingContactInfoGeneric,
    ];

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationResult::MissingEmail => "MISSING_EMAIL",
            ValidationResult::MissingMobile => "MISSING_MOBILE",
            ValidationResult::MissingContactInfoGeneric => "MISSING_CONTACT_INFO_GENERIC",
        }
    }

    /// Default English description.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationResult::MissingEmail => "Email address is missing",
            ValidationResult::MissingMobile => "Mobile number is missing",
            ValidationResult::MissingContactInfoGeneric => {
                "Contact information is incomplete: please provide an email address or mobile number"
            }
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ValidationResult {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValidationResult::ALL
            .into_iter()
            .find(|result| result.code() == s)
            .ok_or_else(|| CoreError::UnknownValidationResult(s.to_string()))
    }
}
