use serde::{Deserialize, Serialize};

use super::id::EntityId;

/// Image used when a ship is created without one
pub const DEFAULT_SHIP_IMAGE: &str = "/default-ship.jpg";

fn default_image() -> String {
    DEFAULT_SHIP_IMAGE.to_string()
}

/// A vessel (navio)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    #[serde(rename = "_id")]
    pub id: EntityId,

    #[serde(rename = "nome")]
    pub name: String,

    /// Flag state (nationality of registration)
    #[serde(rename = "bandeira")]
    pub flag: String,

    #[serde(rename = "imagem", default = "default_image")]
    pub image: String,
}

/// Caller-supplied ship fields for create and partial update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipFields {
    pub name: Option<String>,
    pub flag: Option<String>,
    pub image: Option<String>,
}

impl ShipFields {
    pub fn new(name: &str, flag: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            flag: Some(flag.to_string()),
            image: None,
        }
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }
}
