//! Domain models and validation rules for the superheroes domain.
//!
//! This module defines the parameter models used internally on the server.
//! They serve as the boundary between the data layer and service/controller
//! layers, with conversion methods from entity models and into DTOs, so that
//! entity models never leak past the data layer.
//!
//! The field-level validation rules (`Strength::parse`, power
//! `validate_description`) also live here and are applied by the services
//! before any write reaches the store.

pub mod hero;
pub mod hero_power;
pub mod power;

#[cfg(test)]
mod test;
