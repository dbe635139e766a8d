//! Query module for read-only operations
//!
//! Queries never mutate the store. They compose records from several
//! collections into response-shaped views.

pub mod declaration_queries;

pub use declaration_queries::{populate_declaration, resolve_people, DeclarationView};
