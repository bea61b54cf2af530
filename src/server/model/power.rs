use crate::model::power::PowerDto;

/// Minimum accepted length for a power description.
pub const MIN_DESCRIPTION_LENGTH: usize = 20;

/// Validates a power description against the minimum-length rule.
///
/// Applied before any write reaches the store, on both creation and update.
///
/// # Returns
/// - `Ok(())` - The description satisfies the rule
/// - `Err(String)` - Human-readable message for the 400 `errors` array
pub fn validate_description(value: &str) -> Result<(), String> {
    if value.len() < MIN_DESCRIPTION_LENGTH {
        return Err(format!(
            "description must be at least {} characters long",
            MIN_DESCRIPTION_LENGTH
        ));
    }

    Ok(())
}

/// Represents a power with full data from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerParam {
    /// Unique identifier for the power.
    pub id: i32,
    /// Name of the power.
    pub name: String,
    /// Descriptive text, at least [`MIN_DESCRIPTION_LENGTH`] characters.
    pub description: String,
}

impl PowerParam {
    /// Converts an entity model to a power param.
    pub fn from_entity(entity: entity::power::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    /// Converts the power param to its projection DTO.
    pub fn into_dto(self) -> PowerDto {
        PowerDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Parameters for updating a power's description.
#[derive(Debug, Clone)]
pub struct UpdatePowerParam {
    /// ID of the power to update.
    pub id: i32,
    /// New description; `None` leaves the stored description unchanged.
    pub description: Option<String>,
}
