//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    address_handler, order_handler, product_category_handler, product_handler, user_handler,
};
use crate::dtos::{
    AddressDto, AddressEditDto, OrderDto, OrderEditDto, ProductCategoryDto, ProductCategoryEditDto,
    ProductCodeDto, ProductDto, ProductEditDto, UserDto, UserEditDto,
};
use crate::infra::repositories::entities::OrderStatus;
use crate::types::{
    AddressPage, OrderPage, PageFilter, ProductCategoryPage, ProductPage, UserPage,
};

/// OpenAPI documentation for the order management API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order API",
        version = "0.1.0",
        description = "Order management backend with addresses, users, products, categories and orders",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Address endpoints
        address_handler::get_address_by_id,
        address_handler::get_all_addresses,
        address_handler::paginate_addresses,
        address_handler::create_address,
        address_handler::update_address,
        address_handler::delete_address,
        // User endpoints
        user_handler::get_user_by_id,
        user_handler::get_all_users,
        user_handler::paginate_users,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Product category endpoints
        product_category_handler::get_category_by_id,
        product_category_handler::get_all_categories,
        product_category_handler::paginate_categories,
        product_category_handler::create_category,
        product_category_handler::update_category,
        product_category_handler::delete_category,
        // Product endpoints
        product_handler::get_product_by_id,
        product_handler::get_all_products,
        product_handler::paginate_products,
        product_handler::create_product,
        product_handler::update_product,
        product_handler::delete_product,
        // Order endpoints
        order_handler::get_order_by_id,
        order_handler::get_all_orders,
        order_handler::paginate_orders,
        order_handler::create_order,
        order_handler::update_order,
        order_handler::delete_order,
    ),
    components(
        schemas(
            // Read DTOs
            AddressDto,
            UserDto,
            ProductDto,
            ProductCodeDto,
            ProductCategoryDto,
            OrderDto,
            OrderStatus,
            // Write DTOs
            AddressEditDto,
            UserEditDto,
            ProductEditDto,
            ProductCategoryEditDto,
            OrderEditDto,
            // Paging
            PageFilter,
            AddressPage,
            UserPage,
            ProductPage,
            ProductCategoryPage,
            OrderPage,
        )
    ),
    tags(
        (name = "Addresses", description = "Shipping address management"),
        (name = "Users", description = "User management"),
        (name = "Products", description = "Product management"),
        (name = "Product categories", description = "Product category management"),
        (name = "Orders", description = "Order management")
    )
)]
pub struct ApiDoc;
