// Rust guideline compliant 2026-10-14

//! Unit tests for error types and messages.

use gjstyle_core::{optimize, Document, Error};
use serde_json::json;

#[test]
fn test_malformed_document_formatting() {
    let error = Error::MalformedDocument("data must be a mapping, got string".to_string());
    assert_eq!(
        error.to_string(),
        "Malformed document: data must be a mapping, got string"
    );
}

#[test]
fn test_invalid_config_formatting() {
    let error = Error::InvalidConfig("GJSTYLE_PRETTY must be true or false".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid config: GJSTYLE_PRETTY must be true or false"
    );
}

#[test]
fn test_json_error_formatting() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json")
        .expect_err("Should fail to parse invalid JSON");
    let msg = Error::Json(json_err).to_string();
    assert!(msg.contains("JSON error"), "got: {msg}");
}

#[test]
fn test_invalid_id_formatting() {
    let msg = Error::InvalidId("'x' is missing the '-' separator".to_string()).to_string();
    assert!(msg.starts_with("Invalid response id"));
}

#[test]
fn test_optimizer_reports_path_of_bad_entry() {
    let mut doc = Document::new();
    doc.insert("error".to_string(), json!({"errors": ["not a mapping"]}));
    let err = optimize(doc).expect_err("Should reject string entry");
    assert_eq!(
        err.to_string(),
        "Malformed document: error.errors[0] must be a mapping, got string"
    );
}
