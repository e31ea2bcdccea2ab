//! Selection of validator implementations by country or policy name.

use crate::{
    ContactCompletenessValidator, GermanLicensePlateValidator, InternalUserCompletenessValidator,
    ValidatorError,
};
use fieldcheck_core::{CompletenessValidator, LicensePlateValidator};
use std::fmt;
use std::str::FromStr;

/// Countries with a license plate validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlateCountry {
    /// Germany (`de`)
    #[default]
    Germany,
}

impl PlateCountry {
    /// Returns the validator for this country.
    pub fn validator(&self) -> Box<dyn LicensePlateValidator> {
        match self {
            PlateCountry::Germany => Box::new(GermanLicensePlateValidator::new()),
        }
    }

    /// Canonical form the validator matches against.
    pub fn normalize(&self, raw: &str) -> String {
        match self {
            PlateCountry::Germany => crate::normalize(raw),
        }
    }

    /// ISO 3166-1 alpha-2 code.
    pub fn code(&self) -> &'static str {
        match self {
            PlateCountry::Germany => "de",
        }
    }
}

impl fmt::Display for PlateCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PlateCountry {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "de" | "deu" | "germany" => Ok(PlateCountry::Germany),
            _ => Err(ValidatorError::unsupported_country(s)),
        }
    }
}

/// Named completeness policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletenessPolicy {
    /// Email address required
    #[default]
    InternalUser,

    /// Email address and mobile number required
    Contact,
}

impl CompletenessPolicy {
    const NAMES: [&'static str; 2] = ["internal-user", "contact"];

    /// Returns the validator implementing this policy.
    pub fn validator(&self) -> Box<dyn CompletenessValidator> {
        match self {
            CompletenessPolicy::InternalUser => Box::new(InternalUserCompletenessValidator::new()),
            CompletenessPolicy::Contact => Box::new(ContactCompletenessValidator::new()),
        }
    }

    /// Policy name as accepted by `from_str`.
    pub fn name(&self) -> &'static str {
        match self {
            CompletenessPolicy::InternalUser => Self::NAMES[0],
            CompletenessPolicy::Contact => Self::NAMES[1],
        }
    }
}

impl fmt::Display for CompletenessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompletenessPolicy {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "internal-user" | "internal_user" => Ok(CompletenessPolicy::InternalUser),
            "contact" => Ok(CompletenessPolicy::Contact),
            _ => Err(ValidatorError::unknown_policy(s, &Self::NAMES)),
        }
    }
}
