use super::store::Store;
use crate::errors::Result;
use crate::model::{Declaration, DeclarationFields, EntityId};
use crate::policy::{ReferencePolicy, StrictValidate};
use crate::rules::validation::{merge_text, require, require_text};

/// Snapshot of every declaration, in insertion order
pub fn list_declarations(store: &Store) -> Vec<Declaration> {
    store.declarations().to_vec()
}

/// Read a declaration by ID (references only, not populated)
///
/// # Errors
/// * `DeclarationNotFound` - If no declaration has this id
pub fn read_declaration<'a>(store: &'a Store, id: &EntityId) -> Result<&'a Declaration> {
    store.get_declaration(id)
}

/// Create a declaration and return the stored record
///
/// Every field is required. The ship and every listed person must exist
/// ([`StrictValidate`]); on failure the store is left untouched.
///
/// # Errors
/// * `MissingField` - If a field is absent (or `numero` is blank)
/// * `ReferencedShipMissing` - If the ship does not exist
/// * `ReferencedPeopleMissing` - If one or more people do not exist
pub fn create_declaration(store: &mut Store, fields: DeclarationFields) -> Result<Declaration> {
    let number = require_text("numero", fields.number)?;
    let travel_date = require("data_viagem", fields.travel_date)?;
    let ship = require("navio", fields.ship)?;
    let people = require("lista_pessoas", fields.people)?;

    StrictValidate.check_ship(store, &ship)?;
    StrictValidate.check_people(store, &people)?;

    let declaration = Declaration {
        id: EntityId::new(),
        number,
        travel_date,
        ship,
        people,
    };

    store.insert_declaration(declaration.clone());
    Ok(declaration)
}

/// Merge supplied fields over an existing declaration
///
/// Only references that are actually supplied are checked, using `policy`.
///
/// # Errors
/// * `DeclarationNotFound` - If no declaration has this id
/// * `InvalidField` - If a supplied `numero` is blank
/// * `ReferencedShipMissing` / `ReferencedPeopleMissing` - If `policy` rejects a new reference
pub fn update_declaration(
    store: &mut Store,
    id: &EntityId,
    fields: DeclarationFields,
    policy: &dyn ReferencePolicy,
) -> Result<Declaration> {
    let mut updated = store.get_declaration(id)?.clone();

    merge_text("numero", &mut updated.number, fields.number)?;
    if let Some(travel_date) = fields.travel_date {
        updated.travel_date = travel_date;
    }
    if let Some(ship) = fields.ship {
        policy.check_ship(store, &ship)?;
        updated.ship = ship;
    }
    if let Some(people) = fields.people {
        policy.check_people(store, &people)?;
        updated.people = people;
    }

    let slot = store.get_declaration_mut(id)?;
    *slot = updated.clone();
    Ok(updated)
}

/// Delete a declaration
///
/// Declarations are never referenced by anything, so deletion only needs
/// the record to exist.
///
/// # Errors
/// * `DeclarationNotFound` - If no declaration has this id
pub fn delete_declaration(store: &mut Store, id: &EntityId) -> Result<()> {
    store.get_declaration(id)?;
    store.remove_declaration(id);
    Ok(())
}
