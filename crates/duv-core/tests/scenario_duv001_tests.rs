//! Scenario: DUV001 with Alice, Bob and Sea Princess
//!
//! Walks one declaration through populated read and protected deletes.
mod common;

use common::{create_alice, create_bob, create_declaration, create_sea_princess, new_store};
use duv_core::errors::DuvError;
use duv_core::ops::{declaration_ops, ship_ops};
use duv_core::populate_declaration;

#[test]
fn test_scenario_duv001_populate_then_delete_in_order() {
    // GIVEN Alice (crew, SID12345), Bob (passenger) and ship S1
    let mut store = new_store();
    let alice = create_alice(&mut store);
    let bob = create_bob(&mut store);
    let s1 = create_sea_princess(&mut store);
    assert_eq!(alice.service_id.as_deref(), Some("SID12345"));
    assert_eq!(bob.service_id, None);

    // AND declaration D1 referencing S1 and [Alice, Bob]
    let d1 = create_declaration(&mut store, "DUV001", s1.id, vec![alice.id, bob.id]);

    // WHEN reading D1's populated view
    let view = populate_declaration(&store, &d1.id).expect("Should populate D1");

    // THEN the ship and people are inlined in order
    assert_eq!(view.id, d1.id);
    assert_eq!(view.id_text, d1.id.to_string());
    assert_eq!(view.number, "DUV001");
    assert_eq!(view.ship, s1);
    assert_eq!(view.people, vec![alice, bob]);

    // AND deleting S1 is refused while D1 exists
    assert!(matches!(
        ship_ops::delete_ship(&mut store, &s1.id),
        Err(DuvError::ShipInUse { .. })
    ));

    // WHEN deleting D1, then S1
    declaration_ops::delete_declaration(&mut store, &d1.id).expect("Should delete D1");
    let result = ship_ops::delete_ship(&mut store, &s1.id);

    // THEN both succeed
    assert!(result.is_ok());
    assert!(ship_ops::list_ships(&store).is_empty());
}

#[test]
fn test_scenario_duv001_view_serializes_with_wire_names() {
    let mut store = new_store();
    let alice = create_alice(&mut store);
    let s1 = create_sea_princess(&mut store);
    let d1 = create_declaration(&mut store, "DUV001", s1.id, vec![alice.id]);

    let view = populate_declaration(&store, &d1.id).unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["_id"], d1.id.to_string());
    assert_eq!(json["id"], d1.id.to_string());
    assert_eq!(json["numero"], "DUV001");
    assert_eq!(json["data_viagem"], "2025-07-10T00:00:00.000Z");
    assert_eq!(json["navio"]["nome"], "Sea Princess");
    assert_eq!(json["pessoas"][0]["sid"], "SID12345");
    assert!(json.get("lista_pessoas").is_none());
}
