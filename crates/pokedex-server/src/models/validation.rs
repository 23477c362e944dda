//! Validation rules and user-facing messages for creature input

use std::collections::HashSet;

use validator::{ValidationError, ValidationErrors};

use pokedex::CreatureType;

/// Every entry must be a known type and no type may repeat
pub fn validate_types(types: &[String]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for raw in types {
        let parsed = raw
            .parse::<CreatureType>()
            .map_err(|_| ValidationError::new("creature_type"))?;
        if !seen.insert(parsed) {
            return Err(ValidationError::new("duplicate_type"));
        }
    }
    Ok(())
}

/// Human-readable message for a failing field
pub fn validation_message(field: &str) -> String {
    match field {
        "name" => "Name is required and must be at most 50 characters.".to_string(),
        "types" => "Please provide one or two valid, distinct types.".to_string(),
        "base_experience" | "baseExperience" => {
            "Base experience is required and must be between 1 and 1000.".to_string()
        }
        "weight" => "Weight is required and must be between 1 and 10000.".to_string(),
        "height" => "Height is required and must be between 1 and 100.".to_string(),
        "stats" => "Stats are required and each must be between 1 and 255.".to_string(),
        "sprites" => "Sprites must be valid.".to_string(),
        other => format!("{} is invalid.", other),
    }
}

/// One message per failing field, in field-name order
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors.errors().keys().map(|k| k.to_string()).collect();
    fields.sort();
    fields.iter().map(|f| validation_message(f)).collect()
}
