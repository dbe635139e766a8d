use super::store::Store;
use crate::errors::{DuvError, Result};
use crate::model::{EntityId, Ship, ShipFields, DEFAULT_SHIP_IMAGE};
use crate::rules::validation::{merge_text, non_blank, require_text};

/// Snapshot of every ship, in insertion order
pub fn list_ships(store: &Store) -> Vec<Ship> {
    store.ships().to_vec()
}

/// Read a ship by ID
///
/// # Errors
/// * `ShipNotFound` - If no ship has this id
pub fn read_ship<'a>(store: &'a Store, id: &EntityId) -> Result<&'a Ship> {
    store.get_ship(id)
}

/// Create a ship and return the stored record
///
/// `name` and `flag` are required; a missing image falls back to
/// [`DEFAULT_SHIP_IMAGE`]. Ship names are unique.
///
/// # Errors
/// * `MissingField` - If `name` or `flag` is absent or blank
/// * `ShipNameTaken` - If another ship already has this name
pub fn create_ship(store: &mut Store, fields: ShipFields) -> Result<Ship> {
    let name = require_text("nome", fields.name)?;
    let flag = require_text("bandeira", fields.flag)?;

    if store.find_ship_by_name(&name).is_some() {
        return Err(DuvError::ShipNameTaken { name });
    }

    let ship = Ship {
        id: EntityId::new(),
        name,
        flag,
        image: non_blank(fields.image).unwrap_or_else(|| DEFAULT_SHIP_IMAGE.to_string()),
    };

    store.insert_ship(ship.clone());
    Ok(ship)
}

/// Merge supplied fields over an existing ship
///
/// # Errors
/// * `ShipNotFound` - If no ship has this id
/// * `InvalidField` - If a supplied name or flag is blank
pub fn update_ship(store: &mut Store, id: &EntityId, fields: ShipFields) -> Result<Ship> {
    let mut updated = store.get_ship(id)?.clone();

    merge_text("nome", &mut updated.name, fields.name)?;
    merge_text("bandeira", &mut updated.flag, fields.flag)?;
    if let Some(image) = non_blank(fields.image) {
        updated.image = image;
    }

    let slot = store.get_ship_mut(id)?;
    *slot = updated.clone();
    Ok(updated)
}

/// Delete a ship that no declaration references
///
/// # Errors
/// * `ShipNotFound` - If no ship has this id
/// * `ShipInUse` - If any declaration points at it (store unchanged)
pub fn delete_ship(store: &mut Store, id: &EntityId) -> Result<()> {
    store.get_ship(id)?;

    if store.is_ship_referenced(id) {
        return Err(DuvError::ShipInUse {
            ship_id: id.to_string(),
        });
    }

    store.remove_ship(id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_image() {
        let mut store = Store::new();
        let ship = create_ship(&mut store, ShipFields::new("Aurora", "Malta")).unwrap();
        assert_eq!(ship.image, DEFAULT_SHIP_IMAGE);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut store = Store::new();
        create_ship(&mut store, ShipFields::new("Aurora", "Malta")).unwrap();
        let err = create_ship(&mut store, ShipFields::new("Aurora", "Panama")).unwrap_err();
        assert!(matches!(err, DuvError::ShipNameTaken { .. }));
        assert_eq!(list_ships(&store).len(), 1);
    }

    #[test]
    fn test_update_blank_image_keeps_existing() {
        let mut store = Store::new();
        let ship = create_ship(
            &mut store,
            ShipFields::new("Aurora", "Malta").with_image("aurora.jpg"),
        )
        .unwrap();

        let updated = update_ship(
            &mut store,
            &ship.id,
            ShipFields {
                image: Some(String::new()),
                flag: Some("Liberia".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.image, "aurora.jpg");
        assert_eq!(updated.flag, "Liberia");
        assert_eq!(read_ship(&store, &ship.id).unwrap(), &updated);
    }
}
