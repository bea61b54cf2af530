//! HeroPower factory for creating test hero-power associations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hero-power associations.
///
/// Requires existing hero and power ids; use the `hero` and `power` factories
/// to create them first, or `helpers::create_hero_power_with_dependencies`
/// for the full chain.
pub struct HeroPowerFactory<'a> {
    db: &'a DatabaseConnection,
    strength: String,
    hero_id: i32,
    power_id: i32,
}

impl<'a> HeroPowerFactory<'a> {
    /// Creates a new HeroPowerFactory linking the given hero and power.
    ///
    /// Defaults:
    /// - strength: `"Average"`
    pub fn new(db: &'a DatabaseConnection, hero_id: i32, power_id: i32) -> Self {
        Self {
            db,
            strength: "Average".to_string(),
            hero_id,
            power_id,
        }
    }

    /// Sets the strength rating.
    pub fn strength(mut self, strength: &str) -> Self {
        self.strength = strength.to_string();
        self
    }

    /// Inserts the hero power into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created hero power entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::hero_power::Model, DbErr> {
        entity::hero_power::ActiveModel {
            strength: ActiveValue::Set(self.strength),
            hero_id: ActiveValue::Set(self.hero_id),
            power_id: ActiveValue::Set(self.power_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hero power with the default strength.
pub async fn create_hero_power(
    db: &DatabaseConnection,
    hero_id: i32,
    power_id: i32,
) -> Result<entity::hero_power::Model, DbErr> {
    HeroPowerFactory::new(db, hero_id, power_id).build().await
}
