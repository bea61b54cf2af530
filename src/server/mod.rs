//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the superheroes
//! API: endpoint handlers, business logic, data access, and infrastructure. The
//! backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, parameter types, and validation rules
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB connection, notifier)
//! - **Startup** (`startup`) - Initialization of database and mail transport
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Controller** parses path/body input, converts DTOs to params, calls service
//! 3. **Service** validates domain rules, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Service** returns domain model to controller
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
