//! Repository layer - Data access abstraction
//!
//! One generic [`Repository`] serves every entity type; the soft-delete
//! capability traits tell it where the bookkeeping columns live.

mod base;
pub mod entities;
mod soft_delete;

pub use base::{BaseEntity, BaseModel, Repository};
pub use soft_delete::{intercept_delete, SoftDeletable};
