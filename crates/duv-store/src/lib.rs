//! DUV Store - startup seeding for the entity store
//!
//! Provides:
//! - JSON seed document parser and importer
//! - Seed digest for provenance
//! - A built-in fallback dataset
//!
//! Nothing here persists: the loaded `Store` lives for the process lifetime.

pub mod errors;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use seed::{load_seed, LoadedSeed, SeedSource};
