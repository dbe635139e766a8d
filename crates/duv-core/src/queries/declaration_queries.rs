//! Declaration read queries
//!
//! The populated view inlines a declaration's ship and people. People are
//! resolved leniently: ids with no matching person are skipped silently.

use serde::Serialize;

use crate::errors::{DuvError, Result};
use crate::model::{EntityId, Person, Ship, TravelDate};
use crate::ops::Store;

/// Declaration with its ship and people replaced by full records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclarationView {
    #[serde(rename = "_id")]
    pub id: EntityId,

    /// Same id as text, kept for clients that read `id`
    #[serde(rename = "id")]
    pub id_text: String,

    #[serde(rename = "numero")]
    pub number: String,

    #[serde(rename = "data_viagem")]
    pub travel_date: TravelDate,

    #[serde(rename = "navio")]
    pub ship: Ship,

    #[serde(rename = "pessoas")]
    pub people: Vec<Person>,
}

/// Map person ids to their current records, in order
///
/// Ids with no match are dropped; duplicates resolve once per occurrence.
pub fn resolve_people(store: &Store, ids: &[EntityId]) -> Vec<Person> {
    ids.iter()
        .filter_map(|id| store.find_person(id).cloned())
        .collect()
}

/// Build the populated view of a declaration
///
/// # Errors
/// * `DeclarationNotFound` - If no declaration has this id
/// * `ShipNotFound` - If the declaration's ship no longer resolves
pub fn populate_declaration(store: &Store, id: &EntityId) -> Result<DeclarationView> {
    let declaration = store.get_declaration(id)?;

    let ship = store
        .find_ship(&declaration.ship)
        .cloned()
        .ok_or_else(|| DuvError::ShipNotFound {
            ship_id: declaration.ship.to_string(),
        })?;

    Ok(DeclarationView {
        id: declaration.id,
        id_text: declaration.id.to_string(),
        number: declaration.number.clone(),
        travel_date: declaration.travel_date,
        ship,
        people: resolve_people(store, &declaration.people),
    })
}
