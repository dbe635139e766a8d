//! Reference policy trait and implementations
//!
//! A declaration points at one ship and a list of people. This module decides
//! what happens when those targets are missing at write time:
//!
//! - [`StrictValidate`] rejects the write (`ReferencedShipMissing` /
//!   `ReferencedPeopleMissing`) and leaves the store untouched.
//! - [`LenientResolve`] accepts the references as given; dangling entries are
//!   dropped later by the read path (see [`crate::queries::resolve_people`]).
//!
//! Declaration creation always uses `StrictValidate`. Updates take the policy
//! as a parameter so the caller can choose.

use crate::errors::{DuvError, Result};
use crate::model::EntityId;
use crate::ops::Store;

/// Policy for checking declaration references against the store
pub trait ReferencePolicy {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Check that the referenced ship can be used
    ///
    /// # Errors
    /// Returns `ReferencedShipMissing` if the policy rejects the reference.
    fn check_ship(&self, store: &Store, ship_id: &EntityId) -> Result<()>;

    /// Check that every referenced person can be used
    ///
    /// # Errors
    /// Returns `ReferencedPeopleMissing` listing the rejected ids, in order.
    fn check_people(&self, store: &Store, person_ids: &[EntityId]) -> Result<()>;
}

/// Every reference must resolve in the store
///
/// # Example
/// ```
/// use duv_core::policy::{ReferencePolicy, StrictValidate};
/// use duv_core::{EntityId, Store};
///
/// let store = Store::new();
/// assert!(StrictValidate.check_ship(&store, &EntityId::new()).is_err());
/// assert!(StrictValidate.check_people(&store, &[]).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictValidate;

impl ReferencePolicy for StrictValidate {
    fn name(&self) -> &'static str {
        "strict_validate"
    }

    fn check_ship(&self, store: &Store, ship_id: &EntityId) -> Result<()> {
        if store.has_ship(ship_id) {
            Ok(())
        } else {
            Err(DuvError::ReferencedShipMissing {
                ship_id: ship_id.to_string(),
            })
        }
    }

    fn check_people(&self, store: &Store, person_ids: &[EntityId]) -> Result<()> {
        let missing: Vec<String> = person_ids
            .iter()
            .filter(|id| !store.has_person(id))
            .map(|id| id.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DuvError::ReferencedPeopleMissing {
                person_ids: missing,
            })
        }
    }
}

/// References are stored without checking
///
/// # Example
/// ```
/// use duv_core::policy::{LenientResolve, ReferencePolicy};
/// use duv_core::{EntityId, Store};
///
/// let store = Store::new();
/// assert!(LenientResolve.check_ship(&store, &EntityId::new()).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientResolve;

impl ReferencePolicy for LenientResolve {
    fn name(&self) -> &'static str {
        "lenient_resolve"
    }

    fn check_ship(&self, _store: &Store, _ship_id: &EntityId) -> Result<()> {
        Ok(())
    }

    fn check_people(&self, _store: &Store, _person_ids: &[EntityId]) -> Result<()> {
        Ok(())
    }
}
