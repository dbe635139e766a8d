//! Field-level rules shared by create and update operations

use rand::Rng;

use super::invariants;
use crate::errors::{DuvError, Result};
use crate::model::Role;
use crate::ops::Store;

/// Prefix of generated service ids
pub const SERVICE_ID_PREFIX: &str = "SID";

/// Treat blank strings as "not supplied"
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Require a non-blank value for a create operation
///
/// # Errors
///
/// Returns `MissingField` when the value is absent or blank.
pub fn require_text(field: &str, value: Option<String>) -> Result<String> {
    non_blank(value).ok_or_else(|| DuvError::MissingField {
        field: field.to_string(),
    })
}

/// Require a value of any type for a create operation
///
/// # Errors
///
/// Returns `MissingField` when the value is absent.
pub fn require<T>(field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| DuvError::MissingField {
        field: field.to_string(),
    })
}

/// Merge an optional replacement over a stored text field
///
/// # Errors
///
/// Returns `InvalidField` when a replacement is supplied but blank.
pub fn merge_text(field: &str, current: &mut String, replacement: Option<String>) -> Result<()> {
    if let Some(value) = replacement {
        if value.trim().is_empty() {
            return Err(DuvError::InvalidField {
                field: field.to_string(),
                reason: "must not be blank".to_string(),
            });
        }
        *current = value;
    }
    Ok(())
}

/// Generate a service id: `SID` followed by five digits
pub fn generate_service_id() -> String {
    let n: u32 = rand::thread_rng().gen_range(10000..=99999);
    format!("{}{}", SERVICE_ID_PREFIX, n)
}

/// Whether `value` has the shape of a generated service id
pub fn is_generated_service_id(value: &str) -> bool {
    value
        .strip_prefix(SERVICE_ID_PREFIX)
        .map(|digits| digits.len() == 5 && digits.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}

/// Service id for a newly created person
///
/// Passengers never carry one. Crew keep the supplied id or get a generated one.
pub fn service_id_on_create(role: Role, supplied: Option<String>) -> Option<String> {
    match role {
        Role::Passenger => None,
        Role::Crew => Some(non_blank(supplied).unwrap_or_else(generate_service_id)),
    }
}

/// Service id after a partial update
///
/// `role` is the role after the merge. Crew without a supplied id keep the
/// previous one, even when that was `None`.
pub fn service_id_on_update(
    role: Role,
    supplied: Option<String>,
    previous: Option<String>,
) -> Option<String> {
    match role {
        Role::Passenger => None,
        Role::Crew => non_blank(supplied).or(previous),
    }
}

/// Validate every store-wide invariant
///
/// Used after bulk loading (seeding), where records bypass the per-operation
/// checks.
///
/// # Errors
///
/// Returns the first violation found: duplicate ids, dangling ship references,
/// dangling person references, then role/service-id mismatches.
pub fn validate_store(store: &Store) -> Result<()> {
    if let Some(id) = invariants::find_duplicate_ids(store).first() {
        return Err(DuvError::InvalidField {
            field: "_id".to_string(),
            reason: format!("identifier {} is used by more than one record", id),
        });
    }

    if let Some((_, ship_id)) = invariants::find_dangling_ship_refs(store).first() {
        return Err(DuvError::ReferencedShipMissing {
            ship_id: ship_id.to_string(),
        });
    }

    let dangling_people = invariants::find_dangling_person_refs(store);
    if !dangling_people.is_empty() {
        return Err(DuvError::ReferencedPeopleMissing {
            person_ids: dangling_people
                .iter()
                .map(|(_, person_id)| person_id.to_string())
                .collect(),
        });
    }

    if let Some(person_id) = invariants::find_service_id_violations(store).first() {
        return Err(DuvError::InvalidField {
            field: "sid".to_string(),
            reason: format!(
                "person {} breaks the rule: crew need a sid, passengers must not have one",
                person_id
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_absent() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(Some("x".to_string())), Some("x".to_string()));
    }

    #[test]
    fn test_require_text_missing_field() {
        let err = require_text("nome", Some(String::new())).unwrap_err();
        assert_eq!(
            err,
            DuvError::MissingField {
                field: "nome".to_string()
            }
        );
    }

    #[test]
    fn test_merge_text_rejects_blank_replacement() {
        let mut name = "Alice".to_string();
        assert!(merge_text("nome", &mut name, Some(" ".to_string())).is_err());
        assert_eq!(name, "Alice");

        merge_text("nome", &mut name, None).unwrap();
        assert_eq!(name, "Alice");

        merge_text("nome", &mut name, Some("Alicia".to_string())).unwrap();
        assert_eq!(name, "Alicia");
    }

    #[test]
    fn test_generated_service_id_shape() {
        for _ in 0..200 {
            let sid = generate_service_id();
            assert!(is_generated_service_id(&sid), "bad sid {sid}");
            let n: u32 = sid[3..].parse().unwrap();
            assert!((10000..=99999).contains(&n));
        }
    }

    #[test]
    fn test_service_id_on_create() {
        assert_eq!(
            service_id_on_create(Role::Passenger, Some("SID1".to_string())),
            None
        );
        assert_eq!(
            service_id_on_create(Role::Crew, Some("SID12345".to_string())),
            Some("SID12345".to_string())
        );
        let generated = service_id_on_create(Role::Crew, Some(String::new())).unwrap();
        assert!(is_generated_service_id(&generated));
    }

    #[test]
    fn test_service_id_on_update() {
        assert_eq!(
            service_id_on_update(Role::Passenger, Some("X".to_string()), Some("Y".to_string())),
            None
        );
        assert_eq!(
            service_id_on_update(Role::Crew, None, Some("SID1".to_string())),
            Some("SID1".to_string())
        );
        assert_eq!(service_id_on_update(Role::Crew, None, None), None);
        assert_eq!(
            service_id_on_update(Role::Crew, Some("NEW".to_string()), Some("OLD".to_string())),
            Some("NEW".to_string())
        );
    }
}
