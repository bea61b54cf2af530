//! Power factory for creating test power entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test powers with customizable fields.
///
/// The default description satisfies the 20-character minimum enforced by the
/// server's validation layer, so factory-created powers are always valid.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::power::PowerFactory;
///
/// let power = PowerFactory::new(&db)
///     .name("Flight")
///     .description("Gives the wielder the ability to fly at supersonic speed")
///     .build()
///     .await?;
/// ```
pub struct PowerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
}

impl<'a> PowerFactory<'a> {
    /// Creates a new PowerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Power {id}"` where id is auto-incremented
    /// - description: a generated sentence longer than 20 characters
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Power {}", id),
            description: format!("A thoroughly described test power number {}", id),
        }
    }

    /// Sets the power's name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Sets the power's description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Inserts the power into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created power entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::power::Model, DbErr> {
        entity::power::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a power with default values.
pub async fn create_power(db: &DatabaseConnection) -> Result<entity::power::Model, DbErr> {
    PowerFactory::new(db).build().await
}
