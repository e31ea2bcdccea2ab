//! # fieldcheck validators
//!
//! Concrete validators for the traits defined in `fieldcheck_core`:
//!
//! - [`GermanLicensePlateValidator`]: German vehicle license plates
//! - [`InternalUserCompletenessValidator`]: requires an email address
//! - [`ContactCompletenessValidator`]: requires email address and mobile number
//!
//! Validators are stateless and can be shared freely across threads. Use
//! [`PlateCountry`] and [`CompletenessPolicy`] to pick one at configuration time.
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck_core::{
//!     CompletenessValidator, ContactInformation, LicensePlateValidator, ValidationResult,
//! };
//! use fieldcheck_validator::{CompletenessPolicy, PlateCountry};
//!
//! let plates = PlateCountry::Germany.validator();
//! assert!(plates.is_valid_str("KA PA 777"));
//! assert!(!plates.is_valid_str("KA PA 0777"));
//!
//! let completeness = CompletenessPolicy::InternalUser.validator();
//! let findings = completeness.check_completeness(&ContactInformation::default());
//! assert_eq!(findings, vec![ValidationResult::MissingEmail]);
//! ```

mod completeness;
mod error;
mod plate;
mod registry;

pub use completeness::*;
pub use error::*;
pub use plate::*;
pub use registry::*;
