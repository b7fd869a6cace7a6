//! Service container.
//!
//! Wires the entity services together. The dependency direction follows the
//! referential-integrity checks: services that guard their deletes against
//! orders hold the order service, and the category service holds the product
//! service to refuse deleting a non-empty category.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    AddressService, OrderService, ProductCategoryService, ProductService, UserService,
};

/// Shared handles to every application service.
#[derive(Clone)]
pub struct Services {
    pub addresses: Arc<AddressService>,
    pub users: Arc<UserService>,
    pub products: Arc<ProductService>,
    pub product_categories: Arc<ProductCategoryService>,
    pub orders: Arc<OrderService>,
}

impl Services {
    /// Create a service container from a database connection.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let orders = Arc::new(OrderService::new(db.clone()));
        let addresses = Arc::new(AddressService::new(db.clone(), orders.clone()));
        let users = Arc::new(UserService::new(db.clone(), orders.clone()));
        let products = Arc::new(ProductService::new(db.clone(), orders.clone()));
        let product_categories = Arc::new(ProductCategoryService::new(db, products.clone()));

        Self {
            addresses,
            users,
            products,
            product_categories,
            orders,
        }
    }
}
