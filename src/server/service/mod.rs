//! Business logic layer orchestrating validation and data access.
//!
//! Services sit between controllers and repositories: they apply the domain
//! validation rules, translate missing rows into the not-found taxonomy, and
//! assemble response DTOs from the param models repositories return.

pub mod hero;
pub mod hero_power;
pub mod notification;
pub mod power;

#[cfg(test)]
mod test;
