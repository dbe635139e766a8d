use std::fmt;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::id::EntityId;
use crate::errors::{DuvError, Result};

/// Travel date of a declaration
///
/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (taken as
/// midnight UTC). Always rendered as RFC 3339 UTC with milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelDate(DateTime<Utc>);

impl TravelDate {
    /// # Errors
    ///
    /// Returns `InvalidField` for `data_viagem` when the text is neither form.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();

        if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(ts.with_timezone(&Utc)));
        }

        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
            DuvError::InvalidField {
                field: "data_viagem".to_string(),
                reason: format!("'{}' is not a date (YYYY-MM-DD or RFC 3339)", value),
            }
        })?;
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| DuvError::InvalidField {
            field: "data_viagem".to_string(),
            reason: format!("'{}' is out of range", value),
        })?;
        Ok(Self(midnight.and_utc()))
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl Serialize for TravelDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for TravelDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        TravelDate::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// A travel declaration (DUV)
///
/// References its ship and people by id only; see
/// [`crate::queries::populate_declaration`] for the inlined view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    #[serde(rename = "_id")]
    pub id: EntityId,

    #[serde(rename = "numero")]
    pub number: String,

    #[serde(rename = "data_viagem")]
    pub travel_date: TravelDate,

    #[serde(rename = "navio")]
    pub ship: EntityId,

    /// Ordered person references; duplicates are kept as given
    #[serde(rename = "lista_pessoas")]
    pub people: Vec<EntityId>,
}

impl Declaration {
    pub fn references_ship(&self, ship_id: &EntityId) -> bool {
        self.ship == *ship_id
    }

    pub fn references_person(&self, person_id: &EntityId) -> bool {
        self.people.contains(person_id)
    }
}

/// Caller-supplied declaration fields for create and partial update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationFields {
    pub number: Option<String>,
    pub travel_date: Option<TravelDate>,
    pub ship: Option<EntityId>,
    pub people: Option<Vec<EntityId>>,
}

impl DeclarationFields {
    pub fn new(
        number: &str,
        travel_date: TravelDate,
        ship: EntityId,
        people: Vec<EntityId>,
    ) -> Self {
        Self {
            number: Some(number.to_string()),
            travel_date: Some(travel_date),
            ship: Some(ship),
            people: Some(people),
        }
    }
}
