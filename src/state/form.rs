//! Form editing state types.
//!
//! This module contains the transient draft behind the add plant form and the
//! validation gate that turns a draft into a [`Plant`].

use super::navigation::FormField;
use crate::garden::{GardenError, Plant};

/// Message shown while the draft's error flag is set.
///
pub const INVALID_FORM_MESSAGE: &str =
    "Please enter a name, a species and a watering frequency of at least 1 day.";

/// Unsaved input for a new plant.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantDraft {
    name: String,
    species: String,
    frequency: String,
    error: bool,
    focused: FormField,
}

impl Default for PlantDraft {
    fn default() -> PlantDraft {
        PlantDraft {
            name: String::new(),
            species: String::new(),
            frequency: String::new(),
            error: false,
            focused: FormField::Name,
        }
    }
}

impl PlantDraft {
    pub fn new() -> PlantDraft {
        PlantDraft::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn focused(&self) -> FormField {
        self.focused
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Species => &self.species,
            FormField::Frequency => &self.frequency,
        }
    }

    pub fn focus(&mut self, field: FormField) -> &mut Self {
        self.focused = field;
        self
    }

    pub fn focus_next(&mut self) -> &mut Self {
        self.focused = self.focused.next();
        self
    }

    pub fn focus_previous(&mut self) -> &mut Self {
        self.focused = self.focused.previous();
        self
    }

    /// Append text to the focused field. The frequency field only accepts
    /// digits: input containing anything else is rejected whole. Returns
    /// whether the draft changed.
    ///
    pub fn input(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        match self.focused {
            FormField::Name => self.name.push_str(text),
            FormField::Species => self.species.push_str(text),
            FormField::Frequency => {
                if !is_digits(text) {
                    return false;
                }
                self.frequency.push_str(text);
            }
        }
        true
    }

    pub fn input_char(&mut self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.input(c.encode_utf8(&mut buf))
    }

    /// Remove the last character of the focused field.
    ///
    pub fn remove_char(&mut self) -> &mut Self {
        match self.focused {
            FormField::Name => self.name.pop(),
            FormField::Species => self.species.pop(),
            FormField::Frequency => self.frequency.pop(),
        };
        self
    }

    /// Run the validation gate. On success the error flag is cleared and the
    /// new plant returned; otherwise the flag is set.
    ///
    pub fn submit(&mut self) -> Result<Plant, GardenError> {
        let result = validate(&self.name, &self.species, &self.frequency);
        self.error = result.is_err();
        result
    }
}

/// Parse a watering frequency: non-empty, ASCII digits only, fits in `u32`.
///
pub fn parse_frequency(text: &str) -> Result<u32, GardenError> {
    if text.is_empty() {
        return Err(GardenError::MissingFrequency);
    }
    if !is_digits(text) {
        return Err(GardenError::MalformedFrequency(text.to_string()));
    }
    text.parse::<u32>()
        .map_err(|_| GardenError::MalformedFrequency(text.to_string()))
}

/// Check raw form input and build a plant with a fresh id when valid.
///
pub fn validate(name: &str, species: &str, frequency: &str) -> Result<Plant, GardenError> {
    if name.trim().is_empty() {
        return Err(GardenError::BlankName);
    }
    if species.trim().is_empty() {
        return Err(GardenError::BlankSpecies);
    }
    let days = parse_frequency(frequency)?;
    Plant::new(name, species, days)
}

fn is_digits(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}
