//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// name to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a hero power association with a fresh hero and power.
///
/// This is a convenience method that creates:
/// 1. Hero
/// 2. Power
/// 3. HeroPower linking the two with the default strength
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((hero, power, hero_power))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_hero_power_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::hero::Model,
        entity::power::Model,
        entity::hero_power::Model,
    ),
    DbErr,
> {
    let hero = crate::factory::hero::create_hero(db).await?;
    let power = crate::factory::power::create_power(db).await?;
    let hero_power = crate::factory::hero_power::create_hero_power(db, hero.id, power.id).await?;

    Ok((hero, power, hero_power))
}
