//! Built-in dataset used when no seed file is configured

use duv_core::ops::{declaration_ops, person_ops, ship_ops};
use duv_core::{DeclarationFields, PersonFields, ShipFields, Store, TravelDate};

use crate::errors::{seed_rejected, Result};

/// Two people, one ship and one declaration linking them
///
/// Built through the regular store operations, so it obeys every rule a
/// running service enforces.
///
/// # Errors
///
/// Only fails if the store rules reject the built-in records.
pub fn fallback_store() -> Result<Store> {
    let mut store = Store::new();
    build(&mut store).map_err(|e| seed_rejected("fallback dataset", e))?;
    Ok(store)
}

fn build(store: &mut Store) -> duv_core::Result<()> {
    let alice = person_ops::create_person(
        store,
        PersonFields::crew("Alice", Some("SID12345"), "Brazilian").with_photo("alice.jpg"),
    )?;
    let bob = person_ops::create_person(
        store,
        PersonFields::passenger("Bob", "American").with_photo("bob.jpg"),
    )?;
    let ship = ship_ops::create_ship(
        store,
        ShipFields::new("Sea Princess", "Panama").with_image("sea_princess.jpg"),
    )?;
    declaration_ops::create_declaration(
        store,
        DeclarationFields::new(
            "DUV001",
            TravelDate::parse("2025-07-10")?,
            ship.id,
            vec![alice.id, bob.id],
        ),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use duv_core::populate_declaration;

    #[test]
    fn test_fallback_contents() {
        let store = fallback_store().unwrap();
        assert_eq!(store.counts(), (2, 1, 1));

        let decl = &store.declarations()[0];
        let view = populate_declaration(&store, &decl.id).unwrap();
        assert_eq!(view.number, "DUV001");
        assert_eq!(view.ship.name, "Sea Princess");
        let names: Vec<_> = view.people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
        assert_eq!(view.people[0].service_id.as_deref(), Some("SID12345"));
        assert_eq!(view.people[1].service_id, None);
    }
}
