//! HTTP request handlers.

pub mod address_handler;
pub mod order_handler;
pub mod product_category_handler;
pub mod product_handler;
pub mod user_handler;

pub use address_handler::address_routes;
pub use order_handler::order_routes;
pub use product_category_handler::product_category_routes;
pub use product_handler::product_routes;
pub use user_handler::user_routes;
