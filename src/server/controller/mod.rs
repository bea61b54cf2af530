//! HTTP request handlers for the API endpoints.
//!
//! Each handler parses its input, delegates to the service layer, and maps the
//! result to a JSON response with the appropriate status code: 200 for reads
//! and updates, 201 for creation, 404 for missing lookup targets, 400 for
//! validation and persistence failures.

pub mod hero;
pub mod hero_power;
pub mod index;
pub mod power;
