//! Data transfer objects.
//!
//! Each entity has a read DTO (returned by queries) and an edit DTO
//! (accepted by create/update). The conversions to and from the persistence
//! models are the adapter seams the generic service is built on:
//! `R: From<Model>` and `W: IntoActiveModel<ActiveModel>`.

mod address;
mod order;
mod product;
mod product_category;
mod user;

pub use address::{AddressDto, AddressEditDto};
pub use order::{OrderDto, OrderEditDto};
pub use product::{ProductCodeDto, ProductDto, ProductEditDto};
pub use product_category::{ProductCategoryDto, ProductCategoryEditDto};
pub use user::{UserDto, UserEditDto};
