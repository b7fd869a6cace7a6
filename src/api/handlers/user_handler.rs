//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::dtos::{UserDto, UserEditDto};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::services::CrudService;
use crate::types::{Created, NoContent, PageFilter, PageResult, UserPage};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_users).post(create_user))
        .route("/paginate", post(paginate_users))
        .route(
            "/:id",
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserDto>> {
    let user = state.services.users.get_by_id(id).await?.ok_or_not_found()?;

    Ok(Json(user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [UserDto])
    )
)]
pub async fn get_all_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserDto>>> {
    let users = state.services.users.get_all().await?;

    Ok(Json(users))
}

/// Get a page of users
#[utoipa::path(
    post,
    path = "/api/users/paginate",
    tag = "Users",
    request_body = PageFilter,
    responses(
        (status = 200, description = "One page of users", body = UserPage),
        (status = 400, description = "Invalid paging parameters")
    )
)]
pub async fn paginate_users(
    State(state): State<AppState>,
    Json(filter): Json<PageFilter>,
) -> AppResult<Json<PageResult<UserDto>>> {
    let page = state.services.users.paginate(filter).await?;

    Ok(Json(page))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserEditDto,
    responses(
        (status = 201, description = "User created", body = UserEditDto),
        (status = 400, description = "Validation error or duplicate email")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(mut dto): ValidatedJson<UserEditDto>,
) -> AppResult<Created<UserEditDto>> {
    if state.services.users.is_duplicate(&dto).await? {
        return Err(AppError::bad_request(
            "An user with the same values already exists.",
        ));
    }

    dto.id = None;
    let id = state.services.users.create(dto.clone()).await?;
    dto.id = Some(id);

    Ok(Created(dto))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UserEditDto,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Validation error or id mismatch"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UserEditDto>,
) -> AppResult<NoContent> {
    if dto.id != Some(id) {
        return Err(AppError::bad_request("ID mismatch between route and body."));
    }

    state.services.users.get_by_id(id).await?.ok_or_not_found()?;

    state.services.users.update(dto).await?;

    Ok(NoContent)
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found"),
        (status = 409, description = "User is referenced by active orders")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.services.users.get_by_id(id).await?.ok_or_not_found()?;

    state.services.users.delete(id).await?;

    Ok(NoContent)
}
