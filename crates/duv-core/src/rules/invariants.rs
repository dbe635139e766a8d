//! Store-wide invariant checks
//!
//! Each finder returns every violation it sees; `validation::validate_store`
//! turns the first one into an error.

use std::collections::HashSet;

use crate::model::{EntityId, Role};
use crate::ops::Store;

/// Declarations whose ship does not exist
///
/// Returns list of (declaration_id, ship_id) tuples
pub fn find_dangling_ship_refs(store: &Store) -> Vec<(EntityId, EntityId)> {
    store
        .declarations()
        .iter()
        .filter(|d| !store.has_ship(&d.ship))
        .map(|d| (d.id, d.ship))
        .collect()
}

/// Declaration people entries that do not exist
///
/// Returns list of (declaration_id, person_id) tuples, in reference order
pub fn find_dangling_person_refs(store: &Store) -> Vec<(EntityId, EntityId)> {
    let mut dangling = Vec::new();
    for decl in store.declarations() {
        for person_id in &decl.people {
            if !store.has_person(person_id) {
                dangling.push((decl.id, *person_id));
            }
        }
    }
    dangling
}

/// People breaking the role/service-id rule
pub fn find_service_id_violations(store: &Store) -> Vec<EntityId> {
    store
        .people()
        .iter()
        .filter(|p| match p.role {
            Role::Crew => p.service_id.is_none(),
            Role::Passenger => p.service_id.is_some(),
        })
        .map(|p| p.id)
        .collect()
}

/// Ids that appear more than once across all three collections
pub fn find_duplicate_ids(store: &Store) -> Vec<EntityId> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    let all_ids = store
        .people()
        .iter()
        .map(|p| p.id)
        .chain(store.ships().iter().map(|s| s.id))
        .chain(store.declarations().iter().map(|d| d.id));

    for id in all_ids {
        if !seen.insert(id) && !duplicates.contains(&id) {
            duplicates.push(id);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Declaration, Person, Ship, TravelDate};

    fn person(role: Role, sid: Option<&str>) -> Person {
        Person {
            id: EntityId::new(),
            name: "P".to_string(),
            role,
            service_id: sid.map(str::to_string),
            nationality: "X".to_string(),
            photo: None,
        }
    }

    #[test]
    fn test_clean_store_has_no_violations() {
        let mut store = Store::new();
        let p = person(Role::Crew, Some("SID1"));
        let ship = Ship {
            id: EntityId::new(),
            name: "S".to_string(),
            flag: "F".to_string(),
            image: "i".to_string(),
        };
        let decl = Declaration {
            id: EntityId::new(),
            number: "D".to_string(),
            travel_date: TravelDate::parse("2025-01-01").unwrap(),
            ship: ship.id,
            people: vec![p.id],
        };
        store.insert_person(p);
        store.insert_ship(ship);
        store.insert_declaration(decl);

        assert!(find_dangling_ship_refs(&store).is_empty());
        assert!(find_dangling_person_refs(&store).is_empty());
        assert!(find_service_id_violations(&store).is_empty());
        assert!(find_duplicate_ids(&store).is_empty());
    }

    #[test]
    fn test_detects_dangling_refs_and_sid_violations() {
        let mut store = Store::new();
        let bad_crew = person(Role::Crew, None);
        let bad_passenger = person(Role::Passenger, Some("SID9"));
        let ghost = EntityId::new();
        let decl = Declaration {
            id: EntityId::new(),
            number: "D".to_string(),
            travel_date: TravelDate::parse("2025-01-01").unwrap(),
            ship: EntityId::new(),
            people: vec![bad_crew.id, ghost],
        };
        let decl_id = decl.id;
        store.insert_person(bad_crew.clone());
        store.insert_person(bad_passenger.clone());
        store.insert_declaration(decl);

        assert_eq!(find_dangling_ship_refs(&store).len(), 1);
        assert_eq!(find_dangling_person_refs(&store), vec![(decl_id, ghost)]);
        assert_eq!(
            find_service_id_violations(&store),
            vec![bad_crew.id, bad_passenger.id]
        );
    }

    #[test]
    fn test_detects_duplicate_ids() {
        let mut store = Store::new();
        let p = person(Role::Passenger, None);
        store.insert_person(p.clone());
        store.insert_person(p.clone());
        assert_eq!(find_duplicate_ids(&store), vec![p.id]);
    }
}
