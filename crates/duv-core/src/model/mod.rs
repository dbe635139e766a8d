pub mod declaration;
pub mod id;
pub mod person;
pub mod ship;

pub use declaration::{Declaration, DeclarationFields, TravelDate};
pub use id::EntityId;
pub use person::{Person, PersonFields, Role};
pub use ship::{Ship, ShipFields, DEFAULT_SHIP_IMAGE};
