//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for
//! each entity. Repositories use SeaORM entity models internally and return
//! parameter models to maintain separation between the data layer and business
//! logic layer. All queries, inserts, and updates are performed through these
//! repositories.

pub mod hero;
pub mod hero_power;
pub mod power;

#[cfg(test)]
mod test;
