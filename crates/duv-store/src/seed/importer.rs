//! Seed importer orchestration
//!
//! Builds a populated [`Store`] from a [`SeedDocument`]:
//! 1. Collects ships from the flat `navios` list and every nested `navio`
//! 2. Collects people from the flat `pessoas` list, then nested people not seen yet
//! 3. Converts declarations, keeping only ids for ship and people
//! 4. Normalises the role/service-id rule and checks every store invariant
//!
//! Records without `_id` get a fresh one. The same id appearing twice with
//! different content fails the whole load.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use duv_core::errors::DuvError;
use duv_core::model::{
    Declaration, EntityId, Person, Role, Ship, TravelDate, DEFAULT_SHIP_IMAGE,
};
use duv_core::rules::validation::{generate_service_id, non_blank, require, require_text};
use duv_core::rules::validate_store;
use duv_core::{log_op_end, log_op_error, log_op_start, Store};

use crate::errors::{seed_rejected, seed_validation, Result};
use crate::seed::digest::compute_seed_digest;
use crate::seed::fallback::fallback_store;
use crate::seed::format::{SeedDeclaration, SeedDocument, SeedPerson, SeedRef, SeedShip};
use crate::seed::parser::{parse_seed_slice, parse_seed_str, read_seed_file};

/// Where a loaded store came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    File { path: PathBuf, digest: String },
    Fallback,
}

/// A store ready to serve, plus its provenance
#[derive(Debug, Clone)]
pub struct LoadedSeed {
    pub store: Store,
    pub source: SeedSource,
}

impl LoadedSeed {
    pub fn digest(&self) -> Option<&str> {
        match &self.source {
            SeedSource::File { digest, .. } => Some(digest),
            SeedSource::Fallback => None,
        }
    }
}

/// Load the seed file if given, else the built-in fallback dataset
///
/// # Errors
///
/// Returns the first read, parse or validation failure; the caller is
/// expected to abort startup.
pub fn load_seed(path: Option<&Path>) -> Result<LoadedSeed> {
    match path {
        Some(path) => load_seed_file(path),
        None => {
            tracing::info!("no seed file configured, using fallback dataset");
            Ok(LoadedSeed {
                store: fallback_store()?,
                source: SeedSource::Fallback,
            })
        }
    }
}

/// Read, digest, parse and import a seed file
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read, otherwise a seed
/// validation error describing the first problem found.
pub fn load_seed_file(path: &Path) -> Result<LoadedSeed> {
    let path_text = path.display().to_string();
    log_op_start!("seed_load", path = %path_text);
    let start = Instant::now();

    let result = read_seed_file(path).and_then(|bytes| {
        let digest = compute_seed_digest(&bytes);
        let document = parse_seed_slice(&bytes)?;
        let store = import_seed(&document)?;
        Ok((store, digest))
    });

    match result {
        Ok((store, digest)) => {
            let (people, ships, declarations) = store.counts();
            log_op_end!(
                "seed_load",
                duration_ms = start.elapsed().as_millis() as u64,
                seed_digest = %digest,
                people_len = people,
                ships_len = ships,
                declarations_len = declarations
            );
            Ok(LoadedSeed {
                store,
                source: SeedSource::File {
                    path: path.to_path_buf(),
                    digest,
                },
            })
        }
        Err(err) => {
            log_op_error!(
                "seed_load",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path_text
            );
            Err(err)
        }
    }
}

/// Parse and import a seed held in memory
///
/// # Errors
///
/// Returns a seed validation error for malformed JSON or invalid records.
pub fn import_seed_str(content: &str) -> Result<Store> {
    import_seed(&parse_seed_str(content)?)
}

/// Import a parsed seed document into a fresh store
///
/// # Errors
///
/// Returns a seed validation error for the first invalid record, conflicting
/// duplicate, or broken cross-reference.
pub fn import_seed(document: &SeedDocument) -> Result<Store> {
    let mut ships: Collected<Ship> = Collected::new("ship");
    let mut people: Collected<Person> = Collected::new("person");
    let mut declarations = Vec::with_capacity(document.duvs.len());

    for seed_ship in &document.navios {
        let ship = convert_ship(seed_ship).map_err(|e| seed_rejected("ship", e))?;
        ships.add(ship.id, ship)?;
    }

    for seed_person in &document.pessoas {
        let person = convert_person(seed_person).map_err(|e| seed_rejected("person", e))?;
        people.add(person.id, person)?;
    }

    for seed_decl in &document.duvs {
        let label = seed_decl.label();
        let declaration = convert_declaration(seed_decl, &mut ships, &mut people, &label)?;
        declarations.push(declaration);
    }

    let mut store = Store::new();
    for ship in ships.items {
        store.insert_ship(ship);
    }
    for mut person in people.items {
        if person.role == Role::Crew && person.service_id.is_none() {
            person.service_id = Some(generate_service_id());
            tracing::debug!(person_id = %person.id, "generated service id for seeded crew member");
        }
        store.insert_person(person);
    }
    for declaration in declarations {
        store.insert_declaration(declaration);
    }

    validate_store(&store).map_err(|e| seed_rejected("seed integrity", e))?;
    Ok(store)
}

/// Insertion-ordered records keyed by id; identical repeats collapse
struct Collected<T> {
    kind: &'static str,
    items: Vec<T>,
    index: HashMap<EntityId, usize>,
}

impl<T: PartialEq> Collected<T> {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn add(&mut self, id: EntityId, item: T) -> Result<()> {
        match self.index.get(&id) {
            Some(&at) if self.items[at] == item => Ok(()),
            Some(_) => Err(seed_validation(&format!(
                "conflicting records for {} id {}",
                self.kind, id
            ))),
            None => {
                self.index.insert(id, self.items.len());
                self.items.push(item);
                Ok(())
            }
        }
    }
}

fn convert_declaration(
    seed: &SeedDeclaration,
    ships: &mut Collected<Ship>,
    people: &mut Collected<Person>,
    label: &str,
) -> Result<Declaration> {
    let reject = |e: DuvError| seed_rejected(label, e);

    let id = seed_id(&seed.id).map_err(reject)?;
    let number = require_text("numero", seed.numero.clone()).map_err(reject)?;
    let date_text = require_text("data_viagem", seed.data_viagem.clone()).map_err(reject)?;
    let travel_date = TravelDate::parse(&date_text).map_err(reject)?;

    let ship = match require("navio", seed.navio.as_ref()).map_err(reject)? {
        SeedRef::Id(text) => EntityId::parse(text).map_err(reject)?,
        SeedRef::Embedded(seed_ship) => {
            let ship = convert_ship(seed_ship).map_err(reject)?;
            let ship_id = ship.id;
            ships.add(ship_id, ship)?;
            ship_id
        }
    };

    let mut person_ids = Vec::with_capacity(seed.lista_pessoas.len());
    for entry in &seed.lista_pessoas {
        let person_id = match entry {
            SeedRef::Id(text) => EntityId::parse(text).map_err(reject)?,
            SeedRef::Embedded(seed_person) => {
                let person = convert_person(seed_person).map_err(reject)?;
                let person_id = person.id;
                people.add(person_id, person)?;
                person_id
            }
        };
        person_ids.push(person_id);
    }

    Ok(Declaration {
        id,
        number,
        travel_date,
        ship,
        people: person_ids,
    })
}

fn seed_id(raw: &Option<String>) -> std::result::Result<EntityId, DuvError> {
    match non_blank(raw.clone()) {
        Some(text) => EntityId::parse(&text),
        None => Ok(EntityId::new()),
    }
}

fn convert_ship(seed: &SeedShip) -> std::result::Result<Ship, DuvError> {
    Ok(Ship {
        id: seed_id(&seed.id)?,
        name: require_text("nome", seed.nome.clone())?,
        flag: require_text("bandeira", seed.bandeira.clone())?,
        image: non_blank(seed.imagem.clone()).unwrap_or_else(|| DEFAULT_SHIP_IMAGE.to_string()),
    })
}

/// Crew without a sid are left `None` here and filled after de-duplication,
/// so repeated copies of the same record still compare equal.
fn convert_person(seed: &SeedPerson) -> std::result::Result<Person, DuvError> {
    let role: Role = require_text("tipo", seed.tipo.clone())?.parse()?;
    let service_id = match role {
        Role::Crew => non_blank(seed.sid.clone()),
        Role::Passenger => None,
    };

    Ok(Person {
        id: seed_id(&seed.id)?,
        name: require_text("nome", seed.nome.clone())?,
        role,
        service_id,
        nationality: require_text("nacionalidade", seed.nacionalidade.clone())?,
        photo: non_blank(seed.foto.clone()),
    })
}
