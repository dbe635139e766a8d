//! Correlation types for request tracking
//!
//! A `RequestId` is minted at the HTTP boundary and carried on the request
//! span so every log line of one request can be grouped together.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Header used to echo the request id back to clients
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Unique identifier for a single request or operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new RequestId using UUIDv7 (time-ordered)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Adopt an id supplied by the caller (e.g. an upstream proxy header)
    ///
    /// Blank or oversized values are replaced by a fresh id.
    pub fn from_header(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.len() > 128 {
            Self::new()
        } else {
            Self(trimmed.to_string())
        }
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_generation() {
        let id1 = RequestId::new();
        let id2 = RequestId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::new();
        assert_eq!(format!("{}", id), id.as_str());
    }

    #[test]
    fn test_from_header_keeps_caller_value() {
        let id = RequestId::from_header("  upstream-42 ");
        assert_eq!(id.as_str(), "upstream-42");
    }

    #[test]
    fn test_from_header_replaces_blank_and_oversized() {
        assert!(!RequestId::from_header("   ").as_str().trim().is_empty());

        let long = "x".repeat(200);
        assert_ne!(RequestId::from_header(&long).as_str(), long);
    }

    #[test]
    fn test_serialization() {
        let id = RequestId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
