use crate::errors::{DuvError, Result};
use crate::model::{Declaration, EntityId, Person, Ship};

/// In-memory store for People, Ships and Declarations
///
/// Collections are plain vectors so listing preserves insertion order.
/// Not thread-safe on its own; callers that share it across tasks wrap it in
/// a lock and hold that lock for the whole operation. All collection access
/// goes through these accessors and the `*_ops` modules.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) people: Vec<Person>,
    pub(crate) ships: Vec<Ship>,
    pub(crate) declarations: Vec<Declaration>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self {
            people: Vec::new(),
            ships: Vec::new(),
            declarations: Vec::new(),
        }
    }

    // ===== People =====

    /// # Errors
    ///
    /// Returns `PersonNotFound` if no person has this id.
    pub fn get_person(&self, id: &EntityId) -> Result<&Person> {
        self.people
            .iter()
            .find(|p| p.id == *id)
            .ok_or_else(|| DuvError::PersonNotFound {
                person_id: id.to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns `PersonNotFound` if no person has this id.
    pub fn get_person_mut(&mut self, id: &EntityId) -> Result<&mut Person> {
        self.people
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| DuvError::PersonNotFound {
                person_id: id.to_string(),
            })
    }

    pub fn find_person(&self, id: &EntityId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == *id)
    }

    pub fn has_person(&self, id: &EntityId) -> bool {
        self.find_person(id).is_some()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Append a person as-is, bypassing validation
    ///
    /// Used by the seed importer and test helpers.
    pub fn insert_person(&mut self, person: Person) {
        self.people.push(person);
    }

    pub(crate) fn remove_person(&mut self, id: &EntityId) -> bool {
        let before = self.people.len();
        self.people.retain(|p| p.id != *id);
        self.people.len() != before
    }

    // ===== Ships =====

    /// # Errors
    ///
    /// Returns `ShipNotFound` if no ship has this id.
    pub fn get_ship(&self, id: &EntityId) -> Result<&Ship> {
        self.ships
            .iter()
            .find(|s| s.id == *id)
            .ok_or_else(|| DuvError::ShipNotFound {
                ship_id: id.to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns `ShipNotFound` if no ship has this id.
    pub fn get_ship_mut(&mut self, id: &EntityId) -> Result<&mut Ship> {
        self.ships
            .iter_mut()
            .find(|s| s.id == *id)
            .ok_or_else(|| DuvError::ShipNotFound {
                ship_id: id.to_string(),
            })
    }

    pub fn find_ship(&self, id: &EntityId) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id == *id)
    }

    pub fn has_ship(&self, id: &EntityId) -> bool {
        self.find_ship(id).is_some()
    }

    pub fn find_ship_by_name(&self, name: &str) -> Option<&Ship> {
        self.ships.iter().find(|s| s.name == name)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Append a ship as-is, bypassing validation
    pub fn insert_ship(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    pub(crate) fn remove_ship(&mut self, id: &EntityId) -> bool {
        let before = self.ships.len();
        self.ships.retain(|s| s.id != *id);
        self.ships.len() != before
    }

    // ===== Declarations =====

    /// # Errors
    ///
    /// Returns `DeclarationNotFound` if no declaration has this id.
    pub fn get_declaration(&self, id: &EntityId) -> Result<&Declaration> {
        self.declarations
            .iter()
            .find(|d| d.id == *id)
            .ok_or_else(|| DuvError::DeclarationNotFound {
                declaration_id: id.to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns `DeclarationNotFound` if no declaration has this id.
    pub fn get_declaration_mut(&mut self, id: &EntityId) -> Result<&mut Declaration> {
        self.declarations
            .iter_mut()
            .find(|d| d.id == *id)
            .ok_or_else(|| DuvError::DeclarationNotFound {
                declaration_id: id.to_string(),
            })
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Append a declaration as-is, bypassing reference checks
    pub fn insert_declaration(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    pub(crate) fn remove_declaration(&mut self, id: &EntityId) -> bool {
        let before = self.declarations.len();
        self.declarations.retain(|d| d.id != *id);
        self.declarations.len() != before
    }

    // ===== Reference scans =====

    /// Whether any declaration points at this ship
    pub fn is_ship_referenced(&self, ship_id: &EntityId) -> bool {
        self.declarations.iter().any(|d| d.references_ship(ship_id))
    }

    /// Whether any declaration lists this person
    pub fn is_person_referenced(&self, person_id: &EntityId) -> bool {
        self.declarations
            .iter()
            .any(|d| d.references_person(person_id))
    }

    /// Collection sizes as (people, ships, declarations)
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.people.len(),
            self.ships.len(),
            self.declarations.len(),
        )
    }
}
