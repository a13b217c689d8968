//! Plant records and the in-memory registry that holds them.

mod error;
mod plant;

pub use error::GardenError;
pub use plant::{Plant, PlantId};

use log::*;

/// Plants inserted into an empty registry at startup: (name, species, days).
///
pub const DEMO_PLANTS: [(&str, &str, u32); 2] = [
    ("Monstera", "Monstera deliciosa", 7),
    ("Snake Plant", "Dracaena trifasciata", 14),
];

/// Insertion-ordered collection of plants for the running session.
///
/// Plants are only ever appended; the order is never changed.
///
#[derive(Debug, Default)]
pub struct Registry {
    plants: Vec<Plant>,
}

impl Registry {
    /// Return a new empty registry.
    ///
    pub fn new() -> Registry {
        Registry { plants: vec![] }
    }

    /// Add the plant to the end of the registry.
    ///
    pub fn append(&mut self, plant: Plant) -> &mut Self {
        debug!("Appending plant {} ({})", plant.name(), plant.id());
        self.plants.push(plant);
        self
    }

    /// Return the plants in insertion order.
    ///
    pub fn list(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Plant> {
        self.plants.get(index)
    }

    /// Return the position of the plant with the given id.
    ///
    pub fn position(&self, id: &PlantId) -> Option<usize> {
        self.plants.iter().position(|p| p.id() == id)
    }
}

/// Insert the demonstration plants if the registry is empty. Returns the
/// number of plants inserted.
///
pub fn seed_demo_plants(registry: &mut Registry) -> Result<usize, GardenError> {
    if !registry.is_empty() {
        debug!("Registry already populated, skipping demo seed.");
        return Ok(0);
    }
    for (name, species, days) in DEMO_PLANTS {
        registry.append(Plant::new(name, species, days)?);
    }
    info!("Seeded {} demo plants.", DEMO_PLANTS.len());
    Ok(DEMO_PLANTS.len())
}
