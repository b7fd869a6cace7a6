//! Address handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::dtos::{AddressDto, AddressEditDto};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::services::CrudService;
use crate::types::{AddressPage, Created, NoContent, PageFilter, PageResult};

/// Create address routes
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_addresses).post(create_address))
        .route("/paginate", post(paginate_addresses))
        .route(
            "/:id",
            get(get_address_by_id)
                .put(update_address)
                .delete(delete_address),
        )
}

/// Get an address by id
#[utoipa::path(
    get,
    path = "/api/addresses/{id}",
    tag = "Addresses",
    params(("id" = i32, Path, description = "Address id")),
    responses(
        (status = 200, description = "Address found", body = AddressDto),
        (status = 404, description = "Address not found")
    )
)]
pub async fn get_address_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AddressDto>> {
    let address = state.services.addresses.get_by_id(id).await?.ok_or_not_found()?;

    Ok(Json(address))
}

/// List all addresses
#[utoipa::path(
    get,
    path = "/api/addresses",
    tag = "Addresses",
    responses(
        (status = 200, description = "All addresses", body = [AddressDto])
    )
)]
pub async fn get_all_addresses(State(state): State<AppState>) -> AppResult<Json<Vec<AddressDto>>> {
    let addresses = state.services.addresses.get_all().await?;

    Ok(Json(addresses))
}

/// Get a page of addresses
#[utoipa::path(
    post,
    path = "/api/addresses/paginate",
    tag = "Addresses",
    request_body = PageFilter,
    responses(
        (status = 200, description = "One page of addresses", body = AddressPage),
        (status = 400, description = "Invalid paging parameters")
    )
)]
pub async fn paginate_addresses(
    State(state): State<AppState>,
    Json(filter): Json<PageFilter>,
) -> AppResult<Json<PageResult<AddressDto>>> {
    let page = state.services.addresses.paginate(filter).await?;

    Ok(Json(page))
}

/// Create an address
#[utoipa::path(
    post,
    path = "/api/addresses",
    tag = "Addresses",
    request_body = AddressEditDto,
    responses(
        (status = 201, description = "Address created", body = AddressEditDto),
        (status = 400, description = "Validation error or duplicate address")
    )
)]
pub async fn create_address(
    State(state): State<AppState>,
    ValidatedJson(mut dto): ValidatedJson<AddressEditDto>,
) -> AppResult<Created<AddressEditDto>> {
    if state.services.addresses.is_duplicate(&dto).await? {
        return Err(AppError::bad_request(
            "An address with the same values already exists.",
        ));
    }

    dto.id = None;
    let id = state.services.addresses.create(dto.clone()).await?;
    dto.id = Some(id);

    Ok(Created(dto))
}

/// Update an address
#[utoipa::path(
    put,
    path = "/api/addresses/{id}",
    tag = "Addresses",
    params(("id" = i32, Path, description = "Address id")),
    request_body = AddressEditDto,
    responses(
        (status = 204, description = "Address updated"),
        (status = 400, description = "Validation error or id mismatch"),
        (status = 404, description = "Address not found")
    )
)]
pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<AddressEditDto>,
) -> AppResult<NoContent> {
    if dto.id != Some(id) {
        return Err(AppError::bad_request("ID mismatch between route and body."));
    }

    state.services.addresses.get_by_id(id).await?.ok_or_not_found()?;

    state.services.addresses.update(dto).await?;

    Ok(NoContent)
}

/// Delete an address
#[utoipa::path(
    delete,
    path = "/api/addresses/{id}",
    tag = "Addresses",
    params(("id" = i32, Path, description = "Address id")),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 404, description = "Address not found"),
        (status = 409, description = "Address is referenced by active orders")
    )
)]
pub async fn delete_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.services.addresses.get_by_id(id).await?.ok_or_not_found()?;

    state.services.addresses.delete(id).await?;

    Ok(NoContent)
}
