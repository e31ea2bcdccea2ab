//! Error types for validator selection.

use thiserror::Error;

/// Errors that can occur while selecting a validator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    /// No plate validator exists for the requested country
    #[error("Unsupported license plate country: '{0}'")]
    UnsupportedCountry(String),

    /// No completeness policy with that name
    #[error("Unknown completeness policy: '{0}' (expected one of: {1})")]
    UnknownPolicy(String, String),
}

impl ValidatorError {
    /// Creates a new unsupported country error.
    pub fn unsupported_country(country: impl Into<String>) -> Self {
        Self::UnsupportedCountry(country.into())
    }

    /// Creates a new unknown policy error.
    pub fn unknown_policy(policy: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownPolicy(policy.into(), expected.join(", "))
    }
}
