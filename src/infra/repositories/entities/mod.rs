//! SeaORM entity definitions.
//!
//! Every entity implements the soft-delete capability traits; that is the
//! only per-entity wiring the generic core requires.

pub mod address;
pub mod order;
pub mod product;
pub mod product_category;
pub mod user;

pub use order::{OrderStatus, ProductIds};
