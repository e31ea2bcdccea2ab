use fieldcheck_core::ContactInformation;
use fieldcheck_parser::{ParserError, parse_file};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_file_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("record.json");
    fs::write(&path, r#"{"email": "jane@example.org"}"#).unwrap();

    let info = parse_file(&path).unwrap();

    assert_eq!(info.email.as_deref(), Some("jane@example.org"));
    assert_eq!(info.mobile_number, None);
}

#[test]
fn test_parse_file_yaml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("record.yml");
    fs::write(&path, "mobileNumber: \"0151 1234567\"\n").unwrap();

    let info = parse_file(&path).unwrap();

    assert_eq!(
        info,
        ContactInformation {
            email: None,
            mobile_number: Some("0151 1234567".to_string()),
        }
    );
}

#[test]
fn test_parse_file_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("record.toml");
    fs::write(&path, "email = \"\"\n").unwrap();

    let info = parse_file(&path).unwrap();

    assert_eq!(info.email.as_deref(), Some(""));
}

#[test]
fn test_parse_file_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    let result = parse_file(&path);

    assert!(matches!(result, Err(ParserError::IoError(_))));
}

#[test]
fn test_parse_file_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("record.txt");
    fs::write(&path, "email: jane@example.org").unwrap();

    let result = parse_file(&path);

    assert!(matches!(result, Err(ParserError::UnsupportedFormat(_))));
}
