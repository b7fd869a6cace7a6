//! Product category handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::dtos::{ProductCategoryDto, ProductCategoryEditDto};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::services::CrudService;
use crate::types::{Created, NoContent, PageFilter, PageResult, ProductCategoryPage};

/// Create product category routes
pub fn product_category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_categories).post(create_category))
        .route("/paginate", post(paginate_categories))
        .route(
            "/:id",
            get(get_category_by_id)
                .put(update_category)
                .delete(delete_category),
        )
}

/// Get a product category by id
#[utoipa::path(
    get,
    path = "/api/product-categories/{id}",
    tag = "Product categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category found", body = ProductCategoryDto),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ProductCategoryDto>> {
    let category = state
        .services
        .product_categories
        .get_by_id(id)
        .await?
        .ok_or_not_found()?;

    Ok(Json(category))
}

/// List all product categories
#[utoipa::path(
    get,
    path = "/api/product-categories",
    tag = "Product categories",
    responses(
        (status = 200, description = "All categories", body = [ProductCategoryDto])
    )
)]
pub async fn get_all_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductCategoryDto>>> {
    let categories = state.services.product_categories.get_all().await?;

    Ok(Json(categories))
}

/// Get a page of product categories
#[utoipa::path(
    post,
    path = "/api/product-categories/paginate",
    tag = "Product categories",
    request_body = PageFilter,
    responses(
        (status = 200, description = "One page of categories", body = ProductCategoryPage),
        (status = 400, description = "Invalid paging parameters")
    )
)]
pub async fn paginate_categories(
    State(state): State<AppState>,
    Json(filter): Json<PageFilter>,
) -> AppResult<Json<PageResult<ProductCategoryDto>>> {
    let page = state.services.product_categories.paginate(filter).await?;

    Ok(Json(page))
}

/// Create a product category
#[utoipa::path(
    post,
    path = "/api/product-categories",
    tag = "Product categories",
    request_body = ProductCategoryEditDto,
    responses(
        (status = 201, description = "Category created", body = ProductCategoryEditDto),
        (status = 400, description = "Validation error or duplicate category")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(mut dto): ValidatedJson<ProductCategoryEditDto>,
) -> AppResult<Created<ProductCategoryEditDto>> {
    if state.services.product_categories.is_duplicate(&dto).await? {
        return Err(AppError::bad_request(
            "A product category with the same values already exists.",
        ));
    }

    dto.id = None;
    let id = state.services.product_categories.create(dto.clone()).await?;
    dto.id = Some(id);

    Ok(Created(dto))
}

/// Update a product category
#[utoipa::path(
    put,
    path = "/api/product-categories/{id}",
    tag = "Product categories",
    params(("id" = i32, Path, description = "Category id")),
    request_body = ProductCategoryEditDto,
    responses(
        (status = 204, description = "Category updated"),
        (status = 400, description = "Validation error or id mismatch"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<ProductCategoryEditDto>,
) -> AppResult<NoContent> {
    if dto.id != Some(id) {
        return Err(AppError::bad_request("ID mismatch between route and body."));
    }

    state
        .services
        .product_categories
        .get_by_id(id)
        .await?
        .ok_or_not_found()?;

    state.services.product_categories.update(dto).await?;

    Ok(NoContent)
}

/// Delete a product category
#[utoipa::path(
    delete,
    path = "/api/product-categories/{id}",
    tag = "Product categories",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category still contains products")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state
        .services
        .product_categories
        .get_by_id(id)
        .await?
        .ok_or_not_found()?;

    state.services.product_categories.delete(id).await?;

    Ok(NoContent)
}
