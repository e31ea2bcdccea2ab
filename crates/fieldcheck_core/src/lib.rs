//! # fieldcheck core
//!
//! Core data structures and validator traits shared by the fieldcheck crates.
//!
//! ## Key Concepts
//!
//! - **LicensePlate**: raw plate text as entered by a user
//! - **ContactInformation**: a record with optional contact channels
//! - **ValidationResult**: the closed set of findings a completeness check can report
//! - **LicensePlateValidator** / **CompletenessValidator**: the capability traits that
//!   concrete country or policy specific validators implement
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck_core::{CompletenessValidator, ContactInformation, ValidationResult};
//!
//! struct EmailRequired;
//!
//! impl CompletenessValidator for EmailRequired {
//!     fn check_completeness(&self, info: &ContactInformation) -> Vec<ValidationResult> {
//!         let mut results = Vec::new();
//!         if !info.has_email() {
//!             results.push(ValidationResult::MissingEmail);
//!         }
//!         results
//!     }
//! }
//!
//! let info = ContactInformation::default();
//! assert_eq!(
//!     EmailRequired.check_completeness(&info),
//!     vec![ValidationResult::MissingEmail]
//! );
//! ```

pub mod builder;
pub mod contact;
pub mod error;
pub mod plate;
pub mod result;
pub mod validator;

pub use builder::*;
pub use contact::*;
pub use error::*;
pub use plate::*;
pub use result::*;
pub use validator::*;
