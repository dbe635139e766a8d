//! Seed document schema
//!
//! Mirrors the JSON dataset the service is seeded from: declarations carry
//! their ship and people as nested objects, plus a flat `pessoas` list and an
//! optional flat `navios` list. Every field is optional at this layer so the
//! importer can report precisely what is missing.

use serde::{Deserialize, Serialize};

/// Top-level seed document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedDocument {
    pub duvs: Vec<SeedDeclaration>,

    pub pessoas: Vec<SeedPerson>,

    #[serde(default)]
    pub navios: Vec<SeedShip>,
}

/// Person record in a seed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedPerson {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub sid: Option<String>,
    #[serde(default)]
    pub nacionalidade: Option<String>,
    #[serde(default)]
    pub foto: Option<String>,
}

/// Ship record in a seed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedShip {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub bandeira: Option<String>,
    #[serde(default)]
    pub imagem: Option<String>,
}

/// Either a bare id string or an embedded record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedRef<T> {
    Id(String),
    Embedded(T),
}

/// Declaration record in a seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedDeclaration {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub data_viagem: Option<String>,
    #[serde(default)]
    pub navio: Option<SeedRef<SeedShip>>,
    #[serde(default)]
    pub lista_pessoas: Vec<SeedRef<SeedPerson>>,
}

impl SeedDeclaration {
    /// Human label for error messages
    pub fn label(&self) -> String {
        match (&self.numero, &self.id) {
            (Some(numero), _) => format!("declaration '{}'", numero),
            (None, Some(id)) => format!("declaration {}", id),
            (None, None) => "declaration without numero".to_string(),
        }
    }
}
