//! # Request Extraction
//!
//! JSON bodies and path ids are parsed here, once, into the store's typed
//! values. Everything past this module works with `EntityId`, `Role` and
//! `TravelDate`, never raw strings.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use duv_core::{
    DeclarationFields, EntityId, PersonFields, Role, ShipFields, TravelDate,
};
use serde::Deserialize;

use crate::error::AppError;

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`]
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Parse a path or body identifier
///
/// # Errors
///
/// Returns an `InvalidIdentifierFormat` error unless `raw` is 24 hex digits.
pub fn parse_id(raw: &str) -> Result<EntityId, AppError> {
    Ok(EntityId::parse(raw.trim())?)
}

/// A reference given either as a bare id or as an embedded record
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdOrRecord {
    Id(String),
    Record {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl IdOrRecord {
    fn parse(&self) -> Result<EntityId, AppError> {
        match self {
            Self::Id(id) | Self::Record { id } => parse_id(id),
        }
    }
}

/// Body of `POST`/`PUT /api/pessoas`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonRequest {
    pub nome: Option<String>,
    pub tipo: Option<String>,
    pub sid: Option<String>,
    pub nacionalidade: Option<String>,
    pub foto: Option<String>,
}

impl PersonRequest {
    /// # Errors
    ///
    /// Returns a validation error if `tipo` is not a known role.
    pub fn into_fields(self) -> Result<PersonFields, AppError> {
        let role = self
            .tipo
            .as_deref()
            .map(str::parse::<Role>)
            .transpose()?;

        Ok(PersonFields {
            name: self.nome,
            role,
            service_id: self.sid,
            nationality: self.nacionalidade,
            photo: self.foto,
        })
    }
}

/// Body of `POST`/`PUT /api/navios`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShipRequest {
    pub nome: Option<String>,
    pub bandeira: Option<String>,
    pub imagem: Option<String>,
}

impl From<ShipRequest> for ShipFields {
    fn from(req: ShipRequest) -> Self {
        Self {
            name: req.nome,
            flag: req.bandeira,
            image: req.imagem,
        }
    }
}

/// Body of `POST`/`PUT /api/duvs`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeclarationRequest {
    pub numero: Option<String>,
    pub data_viagem: Option<String>,
    pub navio: Option<IdOrRecord>,
    pub lista_pessoas: Option<Vec<IdOrRecord>>,
}

impl DeclarationRequest {
    /// # Errors
    ///
    /// Returns `InvalidIdentifierFormat` for a malformed reference and a
    /// validation error for an unparseable `data_viagem`.
    pub fn into_fields(self) -> Result<DeclarationFields, AppError> {
        let travel_date = self
            .data_viagem
            .as_deref()
            .map(TravelDate::parse)
            .transpose()?;
        let ship = self.navio.as_ref().map(IdOrRecord::parse).transpose()?;
        let people = self
            .lista_pessoas
            .map(|refs| refs.iter().map(IdOrRecord::parse).collect::<Result<Vec<_>, _>>())
            .transpose()?;

        Ok(DeclarationFields {
            number: self.numero,
            travel_date,
            ship,
            people,
        })
    }
}
