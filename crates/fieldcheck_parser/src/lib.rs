//! Parser for contact information records (JSON/YAML/TOML formats).
//!
//! Keys use camelCase (`email`, `mobileNumber`). Missing keys and explicit
//! nulls both decode as absent fields.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck_parser::parse_yaml;
//!
//! let yaml = r#"
//! email: jane@example.org
//! mobileNumber: "+49 151 1234567"
//! "#;
//!
//! let info = parse_yaml(yaml).expect("Failed to parse record");
//! assert_eq!(info.email.as_deref(), Some("jane@example.org"));
//! ```

use fieldcheck_core::ContactInformation;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during record parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported record file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

impl RecordFormat {
    /// Detects the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `ParserError::InvalidExtension` if the file has no extension.
    /// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or(ParserError::InvalidExtension)?;

        match extension.to_lowercase().as_str() {
            "json" => Ok(RecordFormat::Json),
            "yaml" | "yml" => Ok(RecordFormat::Yaml),
            "toml" => Ok(RecordFormat::Toml),
            other => Err(ParserError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parse a record from a JSON string.
pub fn parse_json(content: &str) -> Result<ContactInformation> {
    let info: ContactInformation = serde_json::from_str(content)?;
    Ok(info)
}

/// Parse a record from a YAML string.
pub fn parse_yaml(content: &str) -> Result<ContactInformation> {
    let info: ContactInformation = serde_yaml_ng::from_str(content)?;
    Ok(info)
}

/// Parse a record from a TOML string.
///
/// ```rust
/// use fieldcheck_parser::parse_toml;
///
/// let info = parse_toml(r#"email = "jane@example.org""#).unwrap();
/// assert!(info.mobile_number.is_none());
/// ```
pub fn parse_toml(content: &str) -> Result<ContactInformation> {
    let info: ContactInformation =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(info)
}

/// Parse a record from a file with automatic format detection.
///
/// The format is determined by the file extension, see [`RecordFormat::from_path`].
///
/// ```no_run
/// use fieldcheck_parser::parse_file;
/// use std::path::Path;
///
/// let info = parse_file(Path::new("records/jane.json")).unwrap();
/// println!("Email: {:?}", info.email);
/// ```
pub fn parse_file(path: &Path) -> Result<ContactInformation> {
    let format = RecordFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        RecordFormat::Json => parse_json(&content),
        RecordFormat::Yaml => parse_yaml(&content),
        RecordFormat::Toml => parse_toml(&content),
    }
}
