use super::store::Store;
use crate::errors::{DuvError, Result};
use crate::model::{EntityId, Person, PersonFields};
use crate::rules::validation::{
    merge_text, non_blank, require, require_text, service_id_on_create, service_id_on_update,
};

/// Snapshot of every person, in insertion order
pub fn list_people(store: &Store) -> Vec<Person> {
    store.people().to_vec()
}

/// Read a person by ID
///
/// # Errors
/// * `PersonNotFound` - If no person has this id
pub fn read_person<'a>(store: &'a Store, id: &EntityId) -> Result<&'a Person> {
    store.get_person(id)
}

/// Create a person and return the stored record
///
/// `name`, `role` and `nationality` are required. Passengers are stored with
/// no service id whatever was supplied; crew without one get a generated
/// `SIDnnnnn`.
///
/// # Errors
/// * `MissingField` - If a required field is absent or blank
pub fn create_person(store: &mut Store, fields: PersonFields) -> Result<Person> {
    let name = require_text("nome", fields.name)?;
    let role = require("tipo", fields.role)?;
    let nationality = require_text("nacionalidade", fields.nationality)?;

    let person = Person {
        id: EntityId::new(),
        name,
        role,
        service_id: service_id_on_create(role, fields.service_id),
        nationality,
        photo: non_blank(fields.photo),
    };

    store.insert_person(person.clone());
    Ok(person)
}

/// Merge supplied fields over an existing person
///
/// Fields left as `None` keep their stored value. The service-id rule is
/// applied to the merged role: a passenger ends up with no service id, crew
/// keep the supplied id or else the previous one (which may be `None`).
///
/// # Errors
/// * `PersonNotFound` - If no person has this id
/// * `InvalidField` - If a supplied text field is blank
pub fn update_person(store: &mut Store, id: &EntityId, fields: PersonFields) -> Result<Person> {
    let mut updated = store.get_person(id)?.clone();

    merge_text("nome", &mut updated.name, fields.name)?;
    merge_text("nacionalidade", &mut updated.nationality, fields.nationality)?;
    if let Some(role) = fields.role {
        updated.role = role;
    }
    if let Some(photo) = fields.photo {
        updated.photo = non_blank(Some(photo));
    }
    updated.service_id =
        service_id_on_update(updated.role, fields.service_id, updated.service_id.take());

    let slot = store.get_person_mut(id)?;
    *slot = updated.clone();
    Ok(updated)
}

/// Delete a person that no declaration lists
///
/// # Errors
/// * `PersonNotFound` - If no person has this id
/// * `PersonInUse` - If any declaration's people list contains it (store unchanged)
pub fn delete_person(store: &mut Store, id: &EntityId) -> Result<()> {
    store.get_person(id)?;

    if store.is_person_referenced(id) {
        return Err(DuvError::PersonInUse {
            person_id: id.to_string(),
        });
    }

    store.remove_person(id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use crate::rules::validation::is_generated_service_id;

    #[test]
    fn test_create_then_read_round_trip() {
        let mut store = Store::new();
        let created = create_person(
            &mut store,
            PersonFields::crew("Alice", Some("SID12345"), "Brazilian").with_photo("alice.jpg"),
        )
        .unwrap();

        assert_eq!(read_person(&store, &created.id).unwrap(), &created);
        assert_eq!(created.service_id.as_deref(), Some("SID12345"));
        assert_eq!(created.photo.as_deref(), Some("alice.jpg"));
    }

    #[test]
    fn test_create_requires_role() {
        let mut store = Store::new();
        let fields = PersonFields {
            role: None,
            ..PersonFields::passenger("Bob", "American")
        };
        let err = create_person(&mut store, fields).unwrap_err();
        assert_eq!(
            err,
            DuvError::MissingField {
                field: "tipo".to_string()
            }
        );
        assert!(list_people(&store).is_empty());
    }

    #[test]
    fn test_update_keeps_unsupplied_fields() {
        let mut store = Store::new();
        let created =
            create_person(&mut store, PersonFields::passenger("Bob", "American")).unwrap();

        let updated = update_person(
            &mut store,
            &created.id,
            PersonFields {
                nationality: Some("Canadian".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.name, "Bob");
        assert_eq!(updated.nationality, "Canadian");
        assert_eq!(updated.role, Role::Passenger);
        assert_eq!(updated.id, created.id);
    }

    #[test]
    fn test_crew_without_sid_gets_generated_one() {
        let mut store = Store::new();
        let created = create_person(&mut store, PersonFields::crew("Carl", None, "Chilean")).unwrap();
        assert!(is_generated_service_id(
            created.service_id.as_deref().unwrap()
        ));
    }

    #[test]
    fn test_delete_absent_person() {
        let mut store = Store::new();
        let result = delete_person(&mut store, &EntityId::new());
        assert!(matches!(result, Err(DuvError::PersonNotFound { .. })));
    }
}
