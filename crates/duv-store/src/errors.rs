//! Error handling for duv-store
//!
//! Wraps duv-core ExError with seed-specific helpers

use duv_core::errors::{DuvError, ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Wrap a domain error raised while building the seeded store
///
/// The domain error's kind is kept as the source; the outer error is always
/// a seed validation failure so startup reports it uniformly.
pub fn seed_rejected(context: &str, err: DuvError) -> ExError {
    let message = format!("{}: {}", context, err);
    seed_validation(&message).with_source(err.into())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_rejected_keeps_domain_kind_as_source() {
        let err = seed_rejected(
            "declaration DUV1",
            DuvError::MissingField {
                field: "numero".to_string(),
            },
        );

        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(err.message().starts_with("declaration DUV1: "));
        assert_eq!(
            err.source_error().map(|s| s.kind()),
            Some(ExErrorKind::ValidationFailure)
        );
    }

    #[test]
    fn test_io_error_kind() {
        let err = io_error(
            "seed_read",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.op(), Some("seed_read"));
    }
}
