//! Order API - order management backend
//!
//! REST backend for addresses, users, products, product categories and
//! orders. Every entity shares one generic repository and service; rows are
//! never physically removed, deletes flip a soft-delete flag that all read
//! paths filter on.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **dtos**: Read and write models for the HTTP surface
//! - **services**: Generic CRUD service plus per-entity business rules
//! - **infra**: Database, entities, migrations and the generic repository
//! - **api**: HTTP handlers, routes and OpenAPI documentation
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dtos;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use infra::Database;
