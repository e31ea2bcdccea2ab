//! License plate input type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A license plate as entered by a user.
///
/// The value is kept verbatim: any casing, spacing or separators. Validators
/// decide how to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicensePlate(String);

impl LicensePlate {
    /// Wraps a raw plate string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw value.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Consumes the plate, returning the raw value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LicensePlate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LicensePlate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for LicensePlate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
