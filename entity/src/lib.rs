//! SeaORM entity definitions for the superheroes domain.
//!
//! Three tables make up the schema: `hero`, `power`, and the `hero_power`
//! join table realizing the many-to-many relationship between them, carrying
//! the `strength` attribute on the relationship itself.

pub mod hero;
pub mod hero_power;
pub mod power;
pub mod prelude;
