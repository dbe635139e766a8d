pub mod declaration_ops;
pub mod person_ops;
pub mod ship_ops;
pub mod store;

pub use store::Store;
