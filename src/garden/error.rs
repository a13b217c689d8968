//! Garden-specific error types.

/// Errors that can occur when building plants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GardenError {
    /// Name was empty or whitespace only
    #[error("Plant name must not be blank")]
    BlankName,

    /// Species was empty or whitespace only
    #[error("Plant species must not be blank")]
    BlankSpecies,

    /// Watering frequency was left empty
    #[error("Watering frequency is required")]
    MissingFrequency,

    /// Watering frequency was not a whole number
    #[error("Watering frequency is not a whole number: {0}")]
    MalformedFrequency(String),

    /// Watering frequency was zero
    #[error("Watering frequency must be at least one day")]
    NonPositiveFrequency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garden_error_display() {
        let error = GardenError::BlankName;
        assert!(error.to_string().contains("name must not be blank"));

        let error = GardenError::BlankSpecies;
        assert!(error.to_string().contains("species must not be blank"));

        let error = GardenError::MissingFrequency;
        assert!(error.to_string().contains("required"));

        let error = GardenError::MalformedFrequency("12x".to_string());
        assert!(error.to_string().contains("not a whole number"));
        assert!(error.to_string().contains("12x"));

        let error = GardenError::NonPositiveFrequency;
        assert!(error.to_string().contains("at least one day"));
    }
}
