//! Application services layer.
//!
//! [`Service`] carries the CRUD operations shared by every entity; the
//! per-entity services wrap it, adding duplicate detection and the
//! referential checks that guard deletes. [`container::Services`] wires
//! them together for the HTTP layer.

mod address_service;
mod base;
pub mod container;
mod order_service;
mod product_category_service;
mod product_service;
mod user_service;

pub use address_service::AddressService;
pub use base::{CrudService, Service};
pub use container::Services;
pub use order_service::OrderService;
pub use product_category_service::ProductCategoryService;
pub use product_service::ProductService;
pub use user_service::UserService;
