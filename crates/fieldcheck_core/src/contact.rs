//! Contact information records.

use serde::{Deserialize, Serialize};

/// Contact details of a user.
///
/// Every channel is optional. A field counts as present when it holds a
/// non-empty string; whitespace-only values are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInformation {
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Mobile phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
}

impl ContactInformation {
    /// Creates a record with no contact channel set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the email is set and not empty.
    pub fn has_email(&self) -> bool {
        is_present(self.email.as_deref())
    }

    /// Returns true if the mobile number is set and not empty.
    pub fn has_mobile_number(&self) -> bool {
        is_present(self.mobile_number.as_deref())
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
