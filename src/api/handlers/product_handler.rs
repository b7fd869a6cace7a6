//! Product handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use rust_decimal::Decimal;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::dtos::{ProductDto, ProductEditDto};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::services::CrudService;
use crate::types::{Created, NoContent, PageFilter, PageResult, ProductPage};

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_products).post(create_product))
        .route("/paginate", post(paginate_products))
        .route(
            "/:id",
            get(get_product_by_id)
                .put(update_product)
                .delete(delete_product),
        )
}

/// Checks shared by create and update: the category must exist and the
/// price cannot be negative.
async fn check_product_references(state: &AppState, dto: &ProductEditDto) -> AppResult<()> {
    let category = state
        .services
        .product_categories
        .get_by_id(dto.product_category_id)
        .await?;
    if category.is_none() {
        return Err(AppError::bad_request(format!(
            "Category with ID {} does not exist.",
            dto.product_category_id
        )));
    }

    if dto.price < Decimal::ZERO {
        return Err(AppError::bad_request(
            "The product price cannot be less than 0.",
        ));
    }

    Ok(())
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ProductDto>> {
    let product = state.services.products.get_by_id(id).await?.ok_or_not_found()?;

    Ok(Json(product))
}

/// List all products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = [ProductDto])
    )
)]
pub async fn get_all_products(State(state): State<AppState>) -> AppResult<Json<Vec<ProductDto>>> {
    let products = state.services.products.get_all().await?;

    Ok(Json(products))
}

/// Get a page of products
#[utoipa::path(
    post,
    path = "/api/products/paginate",
    tag = "Products",
    request_body = PageFilter,
    responses(
        (status = 200, description = "One page of products", body = ProductPage),
        (status = 400, description = "Invalid paging parameters")
    )
)]
pub async fn paginate_products(
    State(state): State<AppState>,
    Json(filter): Json<PageFilter>,
) -> AppResult<Json<PageResult<ProductDto>>> {
    let page = state.services.products.paginate(filter).await?;

    Ok(Json(page))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = ProductEditDto,
    responses(
        (status = 201, description = "Product created", body = ProductEditDto),
        (status = 400, description = "Validation error, duplicate product, unknown category or negative price")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(mut dto): ValidatedJson<ProductEditDto>,
) -> AppResult<Created<ProductEditDto>> {
    if state.services.products.is_duplicate(&dto).await? {
        return Err(AppError::bad_request(
            "A product with the same values already exists.",
        ));
    }

    check_product_references(&state, &dto).await?;

    dto.id = None;
    let id = state.services.products.create(dto.clone()).await?;
    dto.id = Some(id);

    Ok(Created(dto))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductEditDto,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Validation error, id mismatch, unknown category or negative price"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<ProductEditDto>,
) -> AppResult<NoContent> {
    if dto.id != Some(id) {
        return Err(AppError::bad_request("ID mismatch between route and body."));
    }

    state.services.products.get_by_id(id).await?.ok_or_not_found()?;

    check_product_references(&state, &dto).await?;

    state.services.products.update(dto).await?;

    Ok(NoContent)
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Product is referenced by active orders")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.services.products.get_by_id(id).await?.ok_or_not_found()?;

    state.services.products.delete(id).await?;

    Ok(NoContent)
}
