//! # API Error Types
//!
//! Maps the store's error taxonomy onto HTTP status codes and a flat JSON
//! body `{"code": "...", "message": "..."}`. Internal details are logged and
//! never returned to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use duv_core::errors::{DuvError, ExError, ExErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable machine-readable code (`ERR_NOT_FOUND`, ...)
    pub code: String,
    pub message: String,
}

/// Application-level error returned by every handler
#[derive(Error, Debug)]
pub enum AppError {
    /// A classified store or seed failure
    #[error("{0}")]
    Domain(ExError),

    /// Body or parameters could not be understood (400)
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Unexpected failure (500); message is logged only
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Domain(err) => {
                let status = match err.kind() {
                    ExErrorKind::NotFound => StatusCode::NOT_FOUND,
                    kind if kind.is_client_error() => StatusCode::BAD_REQUEST,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.code())
            }
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, ExErrorKind::InvalidInput.code()),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ExErrorKind::Internal.code(),
            ),
        }
    }

    /// Classified form of this error, for logging
    pub fn to_ex_error(&self) -> ExError {
        match self {
            Self::Domain(err) => err.clone(),
            Self::BadRequest(message) => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message.clone())
            }
            Self::Internal(message) => {
                ExError::new(ExErrorKind::Internal).with_message(message.clone())
            }
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Domain(err) if err.kind().is_client_error() => match err.entity_id() {
                Some(id) if !id.is_empty() => format!("{}: {}", err.message(), id),
                _ => err.message().to_string(),
            },
            Self::BadRequest(message) => message.clone(),
            _ => "An internal error occurred".to_string(),
        }
    }
}

impl From<ExError> for AppError {
    fn from(err: ExError) -> Self {
        Self::Domain(err)
    }
}

impl From<DuvError> for AppError {
    fn from(err: DuvError) -> Self {
        Self::Domain(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorBody {
            code: code.to_string(),
            message: self.client_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_404() {
        let err = AppError::from(DuvError::ShipNotFound {
            ship_id: "abc".to_string(),
        });
        assert_eq!(
            err.status_and_code(),
            (StatusCode::NOT_FOUND, "ERR_NOT_FOUND")
        );
        assert_eq!(err.client_message(), "Ship not found: abc");
    }

    #[test]
    fn referential_failures_are_400() {
        let in_use = AppError::from(DuvError::PersonInUse {
            person_id: "p".to_string(),
        });
        let missing = AppError::from(DuvError::ReferencedShipMissing {
            ship_id: "s".to_string(),
        });
        let bad_id = AppError::from(DuvError::InvalidIdentifier {
            value: "xyz".to_string(),
        });

        for err in [in_use, missing, bad_id] {
            assert_eq!(err.status_and_code().0, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn internal_message_is_generic() {
        let err = AppError::from(DuvError::Internal {
            message: "lock table corrupted".to_string(),
        });
        assert_eq!(
            err.status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, "ERR_INTERNAL")
        );
        assert_eq!(err.client_message(), "An internal error occurred");
    }

    #[test]
    fn bad_request_keeps_message() {
        let err = AppError::BadRequest("expected value at line 1".to_string());
        assert_eq!(
            err.status_and_code(),
            (StatusCode::BAD_REQUEST, "ERR_INVALID_INPUT")
        );
        assert!(err.client_message().contains("line 1"));
    }
}
