//! Builder for contact information records.

use crate::ContactInformation;

/// Builder for creating a `ContactInformation`.
///
/// # Example
///
/// ```rust
/// use fieldcheck_core::ContactInformationBuilder;
///
/// let info = ContactInformationBuilder::new()
///     .email("jane@example.org")
///     .mobile_number("+49 151 1234567")
///     .build();
///
/// assert!(info.has_email());
/// assert!(info.has_mobile_number());
/// ```
#[derive(Debug, Default)]
pub struct ContactInformationBuilder {
    email: Option<String>,
    mobile_number: Option<String>,
}

impl ContactInformationBuilder {
    /// Creates a builder with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing record.
    pub fn from_record(info: ContactInformation) -> Self {
        Self {
            email: info.email,
            mobile_number: info.mobile_number,
        }
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the mobile number.
    pub fn mobile_number(mut self, mobile_number: impl Into<String>) -> Self {
        self.mobile_number = Some(mobile_number.into());
        self
    }

    /// Builds the record.
    pub fn build(self) -> ContactInformation {
        ContactInformation {
            email: self.email,
            mobile_number: self.mobile_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_empty() {
        assert_eq!(
            ContactInformationBuilder::new().build(),
            ContactInformation::default()
        );
    }

    #[test]
    fn test_builder_overrides_existing_record() {
        let existing = ContactInformation {
            email: Some("old@example.org".to_string()),
            mobile_number: Some("0151".to_string()),
        };

        let info = ContactInformationBuilder::from_record(existing)
            .email("new@example.org")
            .build();

        assert_eq!(info.email.as_deref(), Some("new@example.org"));
        assert_eq!(info.mobile_number.as_deref(), Some("0151"));
    }
}
