//! ABI document parser.
//!
//! Parses ink! metadata JSON into [`AbiDocument`], rejecting documents whose
//! top-level version marker is not `V3`.

use crate::error::ParseError;
use crate::types::AbiDocument;
use serde_json::Value;
use std::path::Path;

/// Top-level key carrying the supported metadata version.
pub const VERSION_KEY: &str = "V3";

/// Parses an ABI document from a JSON string.
///
/// # Arguments
/// * `json` - ABI document content
///
/// # Returns
/// Parsed document or parse error.
///
/// # Errors
/// Returns `ParseError::Json` if the content is not valid JSON or does not
/// match the V3 layout, and `ParseError::UnsupportedVersion` if the `V3`
/// marker is missing.
pub fn parse_abi(json: &str) -> Result<AbiDocument, ParseError> {
    let value: Value = serde_json::from_str(json)?;

    let Value::Object(map) = &value else {
        return Err(ParseError::invalid_structure(
            "top-level ABI value must be an object",
        ));
    };

    if !map.contains_key(VERSION_KEY) {
        return Err(ParseError::unsupported_version(detect_version(&value)));
    }

    Ok(serde_json::from_value(value)?)
}

/// Reads and parses an ABI document from a file.
///
/// # Errors
/// Returns `ParseError::Io` if the file cannot be read, otherwise the same
/// errors as [`parse_abi`].
pub fn parse_abi_file(path: &Path) -> Result<AbiDocument, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_abi(&json)
}

/// Finds whatever version marker the document carries, for diagnostics.
fn detect_version(value: &Value) -> Option<String> {
    let map = value.as_object()?;

    if let Some(version) = map.get("version") {
        return Some(match version {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
    }

    map.keys()
        .find(|k| {
            k.len() > 1 && k.starts_with('V') && k[1..].chars().all(|c| c.is_ascii_digit())
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_v3() {
        let json = r#"{
            "contract": {"name": "flipper", "version": "0.1.0"},
            "V3": {
                "spec": {
                    "messages": [
                        {"label": "flip", "selector": "0x633aa551", "args": [],
                         "returnType": null, "mutates": true, "payable": false, "docs": []}
                    ]
                },
                "types": [{"id": 0, "type": {"def": {"primitive": "bool"}}}]
            }
        }"#;

        let doc = parse_abi(json).expect("Failed to parse");
        assert_eq!(doc.messages().len(), 1);
        assert_eq!(doc.registry().len(), 1);
        assert_eq!(doc.contract.map(|c| c.name), Some("flipper".to_string()));
    }

    #[test]
    fn test_parse_missing_version() {
        let result = parse_abi(r#"{"spec": {"messages": []}}"#);
        assert!(matches!(
            result,
            Err(ParseError::UnsupportedVersion { found: None })
        ));
    }

    #[test]
    fn test_parse_other_version_detected() {
        let result = parse_abi(r#"{"V4": {"spec": {}}}"#);
        match result {
            Err(ParseError::UnsupportedVersion { found }) => {
                assert_eq!(found.as_deref(), Some("V4"));
            }
            other => panic!("expected unsupported version, got {other:?}"),
        }

        let result = parse_abi(r#"{"version": "4", "spec": {}}"#);
        match result {
            Err(ParseError::UnsupportedVersion { found }) => {
                assert_eq!(found.as_deref(), Some("4"));
            }
            other => panic!("expected unsupported version, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_malformed_json() {
        let result = parse_abi("{ not json");
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_parse_non_object() {
        let result = parse_abi("[1, 2, 3]");
        assert!(matches!(result, Err(ParseError::InvalidStructure { .. })));
    }

    #[test]
    fn test_parse_wrong_shape_under_v3() {
        let result = parse_abi(r#"{"V3": {"types": []}}"#);
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_parse_abi_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("empty.json");
        std::fs::write(&path, r#"{"V3": {"spec": {"messages": []}, "types": []}}"#)
            .expect("write");

        let doc = parse_abi_file(&path).expect("parse");
        assert!(doc.messages().is_empty());

        let missing = parse_abi_file(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(ParseError::Io(_))));
    }
}
