//! DUV Core - in-memory entity store for travel declarations
//!
//! This crate owns the three collections (People, Ships, Declarations) and
//! every rule that keeps them consistent:
//! - Typed entity identifiers (`EntityId`)
//! - CRUD operations per entity kind
//! - Referential protection on delete and reference checks on write
//! - Populated declaration views
//! - The error and logging facilities shared by the other crates

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod policy;
pub mod queries;
pub mod rules;

// Re-export commonly used types
pub use errors::{DuvError, ExError, ExErrorKind, Result};
pub use model::{
    Declaration, DeclarationFields, EntityId, Person, PersonFields, Role, Ship, ShipFields,
    TravelDate,
};
pub use ops::Store;
pub use policy::{LenientResolve, ReferencePolicy, StrictValidate};
pub use queries::{populate_declaration, resolve_people, DeclarationView};
