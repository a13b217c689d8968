use super::GardenError;
use std::fmt;

/// Opaque identifier assigned to a plant when it is created.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlantId(String);

impl PlantId {
    /// Generate a fresh identifier from a random 128-bit value.
    ///
    pub fn generate() -> PlantId {
        PlantId(format!("{:032x}", rand::random::<u128>()))
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Defines plant data structure.
///
/// Fields are private so every instance has passed through [`Plant::new`].
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plant {
    id: PlantId,
    name: String,
    species: String,
    watering_frequency_days: u32,
}

impl Plant {
    /// Build a plant with a newly generated id. Name and species are stored
    /// trimmed and must not be blank; the watering frequency must be positive.
    ///
    pub fn new(
        name: &str,
        species: &str,
        watering_frequency_days: u32,
    ) -> Result<Plant, GardenError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GardenError::BlankName);
        }
        let species = species.trim();
        if species.is_empty() {
            return Err(GardenError::BlankSpecies);
        }
        if watering_frequency_days == 0 {
            return Err(GardenError::NonPositiveFrequency);
        }
        Ok(Plant {
            id: PlantId::generate(),
            name: name.to_string(),
            species: species.to_string(),
            watering_frequency_days,
        })
    }

    pub fn id(&self) -> &PlantId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn watering_frequency_days(&self) -> u32 {
        self.watering_frequency_days
    }

    /// Human readable watering schedule, e.g. "every 7 days".
    ///
    pub fn watering_label(&self) -> String {
        match self.watering_frequency_days {
            1 => "every day".to_string(),
            days => format!("every {} days", days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use std::collections::HashSet;

    #[test]
    fn new_trims_name_and_species() {
        let plant = Plant::new("  Fern ", " Nephrolepis\t", 5).unwrap();
        assert_eq!(plant.name(), "Fern");
        assert_eq!(plant.species(), "Nephrolepis");
        assert_eq!(plant.watering_frequency_days(), 5);
    }

    #[test]
    fn new_rejects_blank_fields() {
        assert_eq!(Plant::new("", "Fern", 5), Err(GardenError::BlankName));
        assert_eq!(Plant::new("   ", "Fern", 5), Err(GardenError::BlankName));
        assert_eq!(Plant::new("Fern", "", 5), Err(GardenError::BlankSpecies));
        assert_eq!(Plant::new("Fern", " \t", 5), Err(GardenError::BlankSpecies));
    }

    #[test]
    fn new_rejects_zero_frequency() {
        assert_eq!(
            Plant::new("Fern", "Nephrolepis", 0),
            Err(GardenError::NonPositiveFrequency)
        );
    }

    #[test]
    fn id_is_stable_across_clones() {
        let plant = Plant::new("Fern", "Nephrolepis", 5).unwrap();
        let copy = plant.clone();
        assert_eq!(plant.id(), copy.id());
        let text = plant.id().to_string();
        assert_eq!(text.len(), 32);
        assert!(text.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn ids_are_unique() {
        let count = 1000;
        let ids: HashSet<PlantId> = (0..count)
            .map(|_| {
                let name: String = Faker.fake();
                let days: u32 = (1..365).fake();
                Plant::new(&format!("p{}", name), "Species", days)
                    .unwrap()
                    .id()
                    .clone()
            })
            .collect();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn watering_label() {
        assert_eq!(
            Plant::new("Cactus", "Cactaceae", 1).unwrap().watering_label(),
            "every day"
        );
        assert_eq!(
            Plant::new("Fern", "Nephrolepis", 5).unwrap().watering_label(),
            "every 5 days"
        );
    }
}
