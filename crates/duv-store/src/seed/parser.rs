//! Seed parser
//!
//! Turns raw JSON into a [`SeedDocument`]. Only syntax and shape are checked
//! here; record-level validation happens in the importer.

use std::fs;
use std::path::Path;

use crate::errors::{io_error, seed_validation, Result};
use crate::seed::format::SeedDocument;

/// Read the raw bytes of a seed file
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read.
pub fn read_seed_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| io_error("seed_read", e).with_entity_id(path.display().to_string()))
}

/// Parse a seed file from a path
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read, or a seed validation
/// error if it is not a well-formed seed document.
pub fn parse_seed_file(path: &Path) -> Result<SeedDocument> {
    let bytes = read_seed_file(path)?;
    parse_seed_slice(&bytes)
}

/// Parse a seed from a string
///
/// # Errors
///
/// Returns a seed validation error if the JSON is malformed or misshapen.
pub fn parse_seed_str(content: &str) -> Result<SeedDocument> {
    parse_seed_slice(content.as_bytes())
}

/// Parse a seed from raw bytes
///
/// # Errors
///
/// Returns a seed validation error if the JSON is malformed or misshapen.
pub fn parse_seed_slice(bytes: &[u8]) -> Result<SeedDocument> {
    serde_json::from_slice(bytes)
        .map_err(|e| seed_validation(&format!("JSON parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use duv_core::ExErrorKind;

    #[test]
    fn test_parse_empty_document() {
        let doc = parse_seed_str(r#"{"duvs":[],"pessoas":[],"navios":[]}"#).unwrap();
        assert!(doc.duvs.is_empty());
        assert!(doc.pessoas.is_empty());
    }

    #[test]
    fn test_missing_top_level_list_is_rejected() {
        let err = parse_seed_str(r#"{"duvs":[]}"#).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(err.message().contains("pessoas"));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = parse_seed_str("{ not json").unwrap_err();
        assert!(err.message().starts_with("JSON parse error"));
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        let err = parse_seed_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
    }
}
