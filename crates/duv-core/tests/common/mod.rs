use duv_core::ops::{declaration_ops, person_ops, ship_ops};
use duv_core::{
    Declaration, DeclarationFields, EntityId, Person, PersonFields, Ship, ShipFields, Store,
    TravelDate,
};

/// Create a new empty Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Crew member "Alice" with sid SID12345
#[allow(dead_code)]
pub fn create_alice(store: &mut Store) -> Person {
    person_ops::create_person(
        store,
        PersonFields::crew("Alice", Some("SID12345"), "Brazilian").with_photo("alice.jpg"),
    )
    .expect("Should create Alice")
}

/// Passenger "Bob"
#[allow(dead_code)]
pub fn create_bob(store: &mut Store) -> Person {
    person_ops::create_person(
        store,
        PersonFields::passenger("Bob", "American").with_photo("bob.jpg"),
    )
    .expect("Should create Bob")
}

/// Ship "Sea Princess" flagged in Panama
#[allow(dead_code)]
pub fn create_sea_princess(store: &mut Store) -> Ship {
    ship_ops::create_ship(
        store,
        ShipFields::new("Sea Princess", "Panama").with_image("sea_princess.jpg"),
    )
    .expect("Should create ship")
}

#[allow(dead_code)]
pub fn travel_date(text: &str) -> TravelDate {
    TravelDate::parse(text).expect("Should parse travel date")
}

/// Create a declaration through the public operation
#[allow(dead_code)]
pub fn create_declaration(
    store: &mut Store,
    number: &str,
    ship: EntityId,
    people: Vec<EntityId>,
) -> Declaration {
    declaration_ops::create_declaration(
        store,
        DeclarationFields::new(number, travel_date("2025-07-10"), ship, people),
    )
    .expect("Should create declaration")
}
