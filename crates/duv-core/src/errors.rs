use duv_core_types::RequestId;
use thiserror::Error;

/// Result type alias using DuvError
pub type Result<T> = std::result::Result<T, DuvError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure the store or the seed loader can produce is classified by
/// one of these kinds. Each kind maps to a stable code that is safe to hand
/// out to API clients and to assert on in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup
    NotFound,
    InvalidIdentifierFormat,

    // Referential integrity
    /// A declaration names a ship or person that does not exist
    ReferencedEntityMissing,
    /// A ship or person is still referenced by at least one declaration
    ReferentialConflict,

    // Validation
    ValidationFailure,
    AlreadyExists,
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidIdentifierFormat => "ERR_INVALID_IDENTIFIER_FORMAT",
            ExErrorKind::ReferencedEntityMissing => "ERR_REFERENCED_ENTITY_MISSING",
            ExErrorKind::ReferentialConflict => "ERR_REFERENTIAL_CONFLICT",
            ExErrorKind::ValidationFailure => "ERR_VALIDATION_FAILURE",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind is the caller's fault (surfaced as a 4xx)
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            ExErrorKind::Io | ExErrorKind::Serialization | ExErrorKind::Internal
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification (`kind`) plus optional context for logs.
/// `message` is the short human-readable text given to clients.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain errors raised by the entity store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DuvError {
    // ===== Lookup =====
    #[error("Person not found: {person_id}")]
    PersonNotFound { person_id: String },

    #[error("Ship not found: {ship_id}")]
    ShipNotFound { ship_id: String },

    #[error("Declaration not found: {declaration_id}")]
    DeclarationNotFound { declaration_id: String },

    /// Text that is not a well-formed entity identifier
    #[error("Invalid identifier format: '{value}'")]
    InvalidIdentifier { value: String },

    // ===== Referential integrity =====
    #[error("Referenced ship does not exist: {ship_id}")]
    ReferencedShipMissing { ship_id: String },

    #[error("One or more referenced people do not exist: {}", person_ids.join(", "))]
    ReferencedPeopleMissing { person_ids: Vec<String> },

    #[error("Ship {ship_id} is referenced by one or more declarations")]
    ShipInUse { ship_id: String },

    #[error("Person {person_id} is referenced by one or more declarations")]
    PersonInUse { person_id: String },

    // ===== Validation =====
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("A ship named '{name}' already exists")]
    ShipNameTaken { name: String },

    // ===== Other =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<DuvError> for ExError {
    fn from(err: DuvError) -> Self {
        match err {
            DuvError::PersonNotFound { person_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(person_id)
                .with_message("Person not found"),

            DuvError::ShipNotFound { ship_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(ship_id)
                .with_message("Ship not found"),

            DuvError::DeclarationNotFound { declaration_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(declaration_id)
                    .with_message("Declaration not found")
            }

            DuvError::InvalidIdentifier { value } => {
                ExError::new(ExErrorKind::InvalidIdentifierFormat)
                    .with_entity_id(value)
                    .with_message("Invalid ID format")
            }

            DuvError::ReferencedShipMissing { ship_id } => {
                ExError::new(ExErrorKind::ReferencedEntityMissing)
                    .with_entity_id(ship_id)
                    .with_message("Ship not found")
            }

            DuvError::ReferencedPeopleMissing { person_ids } => {
                ExError::new(ExErrorKind::ReferencedEntityMissing)
                    .with_entity_id(person_ids.join(","))
                    .with_message("One or more people not found")
            }

            DuvError::ShipInUse { ship_id } => ExError::new(ExErrorKind::ReferentialConflict)
                .with_entity_id(ship_id)
                .with_message("Cannot delete ship: it is associated with one or more declarations"),

            DuvError::PersonInUse { person_id } => {
                ExError::new(ExErrorKind::ReferentialConflict)
                    .with_entity_id(person_id)
                    .with_message(
                        "Cannot delete person: it is associated with one or more declarations",
                    )
            }

            DuvError::MissingField { field } => ExError::new(ExErrorKind::ValidationFailure)
                .with_message(format!("Missing required field: {}", field)),

            DuvError::InvalidField { field, reason } => {
                ExError::new(ExErrorKind::ValidationFailure)
                    .with_message(format!("Invalid value for field {}: {}", field, reason))
            }

            DuvError::ShipNameTaken { name } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(name)
                .with_message("A ship with this name already exists"),

            DuvError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            DuvError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for DuvError {
    fn from(err: serde_json::Error) -> Self {
        DuvError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let kinds = [
            ExErrorKind::NotFound,
            ExErrorKind::InvalidIdentifierFormat,
            ExErrorKind::ReferencedEntityMissing,
            ExErrorKind::ReferentialConflict,
            ExErrorKind::ValidationFailure,
            ExErrorKind::AlreadyExists,
            ExErrorKind::InvalidInput,
            ExErrorKind::Io,
            ExErrorKind::Serialization,
            ExErrorKind::Internal,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_client_error_split() {
        assert!(ExErrorKind::NotFound.is_client_error());
        assert!(ExErrorKind::ReferentialConflict.is_client_error());
        assert!(!ExErrorKind::Internal.is_client_error());
        assert!(!ExErrorKind::Io.is_client_error());
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("read_ship")
            .with_message("Ship not found")
            .with_entity_id("abc");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_NOT_FOUND]"));
        assert!(text.contains("read_ship"));
        assert!(text.contains("(entity_id: abc)"));
    }

    #[test]
    fn test_source_chain() {
        let inner = ExError::new(ExErrorKind::Io).with_message("disk gone");
        let outer = ExError::new(ExErrorKind::Internal).with_source(inner);
        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(ExErrorKind::Io)
        );
        assert!(std::error::Error::source(&outer).is_some());
    }
}
