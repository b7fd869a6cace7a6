//! Order handlers.
//!
//! Orders reference users, addresses and products that live behind their own
//! services, so these handlers do the cross-entity work: verifying the
//! referenced rows on writes, recomputing the total from current product
//! prices, and decorating read results with display fields.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::dtos::{OrderDto, OrderEditDto};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::services::CrudService;
use crate::types::{Created, NoContent, OrderPage, PageFilter, PageResult};

/// Create order routes
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_orders).post(create_order))
        .route("/paginate", post(paginate_orders))
        .route(
            "/:id",
            get(get_order_by_id).put(update_order).delete(delete_order),
        )
}

/// Fill in the display fields on a batch of orders with three batched
/// lookups, one per referenced entity.
async fn enrich_orders(state: &AppState, orders: &mut [OrderDto]) -> AppResult<()> {
    if orders.is_empty() {
        return Ok(());
    }

    let mut address_ids: Vec<i32> = orders.iter().map(|o| o.address_id).collect();
    address_ids.sort_unstable();
    address_ids.dedup();

    let mut user_ids: Vec<i32> = orders.iter().map(|o| o.user_id).collect();
    user_ids.sort_unstable();
    user_ids.dedup();

    let mut product_ids: Vec<i32> = orders
        .iter()
        .flat_map(|o| o.product_ids.iter().copied())
        .collect();
    product_ids.sort_unstable();
    product_ids.dedup();

    let addresses = state.services.addresses.get_by_ids(&address_ids).await?;
    let users = state.services.users.get_by_ids(&user_ids).await?;
    let product_codes = state.services.products.get_codes_by_ids(&product_ids).await?;

    for order in orders.iter_mut() {
        order.address_full = addresses
            .iter()
            .find(|a| a.id == order.address_id)
            .map(|a| a.full_address.clone());

        order.user_name = users
            .iter()
            .find(|u| u.id == order.user_id)
            .map(|u| u.name.clone());

        order.product_codes = product_codes
            .iter()
            .filter(|pc| order.product_ids.contains(&pc.product_id))
            .map(|pc| pc.code.clone())
            .collect();
    }

    Ok(())
}

/// Checks shared by create and update: the user, the address and every
/// product must exist. Returns the recomputed order total.
async fn check_order_references(
    state: &AppState,
    dto: &OrderEditDto,
) -> AppResult<rust_decimal::Decimal> {
    let address = state.services.addresses.get_by_id(dto.address_id).await?;
    if address.is_none() {
        return Err(AppError::bad_request(format!(
            "Address with ID {} does not exist.",
            dto.address_id
        )));
    }

    let user = state.services.users.get_by_id(dto.user_id).await?;
    if user.is_none() {
        return Err(AppError::bad_request(format!(
            "User with ID {} does not exist.",
            dto.user_id
        )));
    }

    let products = state.services.products.get_by_ids(&dto.product_ids).await?;
    if products.len() != dto.product_ids.len() {
        return Err(AppError::bad_request("Some of the products do not exist."));
    }

    state.services.products.sum_prices(&dto.product_ids).await
}

/// Get an order by id
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order found", body = OrderDto),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<OrderDto>> {
    let order = state.services.orders.get_by_id(id).await?.ok_or_not_found()?;

    let mut orders = [order];
    enrich_orders(&state, &mut orders).await?;
    let [order] = orders;

    Ok(Json(order))
}

/// List all orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "All orders", body = [OrderDto])
    )
)]
pub async fn get_all_orders(State(state): State<AppState>) -> AppResult<Json<Vec<OrderDto>>> {
    let mut orders = state.services.orders.get_all().await?;

    enrich_orders(&state, &mut orders).await?;

    Ok(Json(orders))
}

/// Get a page of orders
#[utoipa::path(
    post,
    path = "/api/orders/paginate",
    tag = "Orders",
    request_body = PageFilter,
    responses(
        (status = 200, description = "One page of orders", body = OrderPage),
        (status = 400, description = "Invalid paging parameters")
    )
)]
pub async fn paginate_orders(
    State(state): State<AppState>,
    Json(filter): Json<PageFilter>,
) -> AppResult<Json<PageResult<OrderDto>>> {
    let mut page = state.services.orders.paginate(filter).await?;

    enrich_orders(&state, &mut page.items).await?;

    Ok(Json(page))
}

/// Create an order
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Orders",
    request_body = OrderEditDto,
    responses(
        (status = 201, description = "Order created", body = OrderEditDto),
        (status = 400, description = "Validation error, duplicate order or unknown references")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(mut dto): ValidatedJson<OrderEditDto>,
) -> AppResult<Created<OrderEditDto>> {
    if state.services.orders.is_duplicate(&dto).await? {
        return Err(AppError::bad_request(
            "An order with the same values already exists.",
        ));
    }

    dto.total_amount = check_order_references(&state, &dto).await?;

    dto.id = None;
    let id = state.services.orders.create(dto.clone()).await?;
    dto.id = Some(id);

    Ok(Created(dto))
}

/// Update an order
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = i32, Path, description = "Order id")),
    request_body = OrderEditDto,
    responses(
        (status = 204, description = "Order updated"),
        (status = 400, description = "Validation error, id mismatch or unknown references"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(mut dto): ValidatedJson<OrderEditDto>,
) -> AppResult<NoContent> {
    if dto.id != Some(id) {
        return Err(AppError::bad_request("ID mismatch between route and body."));
    }

    state.services.orders.get_by_id(id).await?.ok_or_not_found()?;

    dto.total_amount = check_order_references(&state, &dto).await?;

    state.services.orders.update(dto).await?;

    Ok(NoContent)
}

/// Delete an order
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = i32, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.services.orders.get_by_id(id).await?.ok_or_not_found()?;

    state.services.orders.delete(id).await?;

    Ok(NoContent)
}
