//! Hero factory for creating test hero entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test heroes with customizable fields.
///
/// Provides a builder pattern for creating hero entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::hero::HeroFactory;
///
/// let hero = HeroFactory::new(&db)
///     .name("Kamala Khan")
///     .super_name("Ms. Marvel")
///     .build()
///     .await?;
/// ```
pub struct HeroFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    super_name: String,
}

impl<'a> HeroFactory<'a> {
    /// Creates a new HeroFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hero {id}"` where id is auto-incremented
    /// - super_name: `"Super Hero {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hero {}", id),
            super_name: format!("Super Hero {}", id),
        }
    }

    /// Sets the hero's civilian name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Sets the hero's superhero name.
    pub fn super_name(mut self, super_name: &str) -> Self {
        self.super_name = super_name.to_string();
        self
    }

    /// Inserts the hero into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created hero entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::hero::Model, DbErr> {
        entity::hero::ActiveModel {
            name: ActiveValue::Set(self.name),
            super_name: ActiveValue::Set(self.super_name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hero with default values.
pub async fn create_hero(db: &DatabaseConnection) -> Result<entity::hero::Model, DbErr> {
    HeroFactory::new(db).build().await
}
