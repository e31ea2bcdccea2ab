//! Error types for the core data structures.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while converting into core types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// String is not one of the known validation result codes
    #[error("Unknown validation result code: '{0}'")]
    UnknownValidationResult(String),
}
