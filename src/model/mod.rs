//! API data transfer objects.
//!
//! Each endpoint serializes its response through an explicit per-endpoint DTO
//! listing the exact fields of the projection; nothing is derived from entity
//! models by reflection. Request bodies deserialize into DTOs here as well.

pub mod api;
pub mod hero;
pub mod hero_power;
pub mod power;
