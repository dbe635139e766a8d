use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::id::EntityId;
use crate::errors::DuvError;

/// Role of a person on board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "tripulante")]
    Crew,
    #[serde(rename = "passageiro")]
    Passenger,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Crew => "tripulante",
            Role::Passenger => "passageiro",
        }
    }

    pub fn is_crew(&self) -> bool {
        matches!(self, Role::Crew)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DuvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tripulante" => Ok(Role::Crew),
            "passageiro" => Ok(Role::Passenger),
            other => Err(DuvError::InvalidField {
                field: "tipo".to_string(),
                reason: format!("expected 'tripulante' or 'passageiro', got '{}'", other),
            }),
        }
    }
}

/// A crew member or passenger
///
/// Invariant: `service_id` is `Some` exactly when `role` is `Crew`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: EntityId,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "tipo")]
    pub role: Role,

    /// Service id (SID); crew only
    #[serde(rename = "sid", default)]
    pub service_id: Option<String>,

    #[serde(rename = "nacionalidade")]
    pub nationality: String,

    /// Photo reference (URI or path)
    #[serde(rename = "foto", default)]
    pub photo: Option<String>,
}

impl Person {
    pub fn is_crew(&self) -> bool {
        self.role.is_crew()
    }
}

/// Caller-supplied person fields
///
/// Used both for creation (where `name`, `role` and `nationality` are
/// required) and for partial updates (where `None` keeps the stored value).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFields {
    pub name: Option<String>,
    pub role: Option<Role>,
    pub service_id: Option<String>,
    pub nationality: Option<String>,
    pub photo: Option<String>,
}

impl PersonFields {
    pub fn crew(name: &str, service_id: Option<&str>, nationality: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            role: Some(Role::Crew),
            service_id: service_id.map(str::to_string),
            nationality: Some(nationality.to_string()),
            photo: None,
        }
    }

    pub fn passenger(name: &str, nationality: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            role: Some(Role::Passenger),
            service_id: None,
            nationality: Some(nationality.to_string()),
            photo: None,
        }
    }

    pub fn with_photo(mut self, photo: &str) -> Self {
        self.photo = Some(photo.to_string());
        self
    }
}
