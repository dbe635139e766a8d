//! Seed import system
//!
//! Provides:
//! - Seed document schema (JSON)
//! - Parser
//! - Digest of the raw seed bytes
//! - Importer building a validated `Store`
//! - Built-in fallback dataset

pub mod digest;
pub mod fallback;
pub mod format;
pub mod importer;
pub mod parser;

pub use digest::compute_seed_digest;
pub use fallback::fallback_store;
pub use format::SeedDocument;
pub use importer::{
    import_seed, import_seed_str, load_seed, load_seed_file, LoadedSeed, SeedSource,
};
pub use parser::{parse_seed_file, parse_seed_str};
