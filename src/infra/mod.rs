//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Entity definitions and the generic repository

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{BaseEntity, BaseModel, Repository, SoftDeletable};
