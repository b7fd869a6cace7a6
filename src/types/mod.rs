//! Shared types for DRY compliance.

mod pagination;
mod response;

pub use pagination::{
    AddressPage, OrderPage, PageFilter, PageResult, ProductCategoryPage, ProductPage, UserPage,
};
pub use response::{Created, NoContent};
