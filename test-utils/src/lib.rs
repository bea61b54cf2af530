//! Superheroes Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the
//! superheroes API. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for seeding domain entities.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Factory methods for creating heroes, powers, and hero powers
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_hero_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_superhero_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
