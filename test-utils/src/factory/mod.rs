//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle unique naming and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let hero = factory::hero::create_hero(&db).await?;
//!     let power = factory::power::create_power(&db).await?;
//!     let hero_power = factory::hero_power::create_hero_power(&db, hero.id, power.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let power = factory::power::PowerFactory::new(&db)
//!     .name("Flight")
//!     .description("Gives the wielder the ability to fly at supersonic speed")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod hero;
pub mod hero_power;
pub mod power;

// Re-export commonly used factory functions for concise usage
pub use hero::create_hero;
pub use hero_power::create_hero_power;
pub use power::create_power;
