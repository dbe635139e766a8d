//! Seed digest
//!
//! SHA-256 over the exact bytes that were loaded, so two runs can be compared
//! by digest alone.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the raw seed bytes
pub fn compute_seed_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            compute_seed_digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_digest_is_byte_sensitive() {
        let a = compute_seed_digest(br#"{"duvs":[],"pessoas":[]}"#);
        let b = compute_seed_digest(br#"{"duvs": [],"pessoas":[]}"#);
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
    }
}
