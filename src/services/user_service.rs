//! User service.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter};

use crate::dtos::{UserDto, UserEditDto};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::user;
use crate::services::{CrudService, OrderService, Service};
use crate::types::{PageFilter, PageResult};

pub struct UserService {
    base: Service<user::Entity, UserDto, UserEditDto>,
    orders: Arc<OrderService>,
}

impl UserService {
    pub fn new(db: DatabaseConnection, orders: Arc<OrderService>) -> Self {
        Self {
            base: Service::new(db),
            orders,
        }
    }

    /// True when a live user already holds the email address.
    pub async fn is_duplicate(&self, dto: &UserEditDto) -> AppResult<bool> {
        tracing::trace!(email = %dto.email, "checking for duplicate user");

        let found = self
            .base
            .query()
            .filter(user::Column::Email.eq(dto.email.as_str()))
            .one(self.base.db())
            .await?;

        Ok(found.is_some())
    }

    /// Batch lookup used when assembling order views.
    pub async fn get_by_ids(&self, ids: &[i32]) -> AppResult<Vec<UserDto>> {
        let models = self
            .base
            .query()
            .filter(user::Column::Id.is_in(ids.iter().copied()))
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(UserDto::from).collect())
    }
}

#[async_trait]
impl CrudService<UserDto, UserEditDto> for UserService {
    async fn get_by_id(&self, id: i32) -> AppResult<Option<UserDto>> {
        self.base.get_by_id(id).await
    }

    async fn get_all(&self) -> AppResult<Vec<UserDto>> {
        self.base.get_all().await
    }

    async fn paginate(&self, filter: PageFilter) -> AppResult<PageResult<UserDto>> {
        self.base.paginate(filter).await
    }

    async fn create(&self, dto: UserEditDto) -> AppResult<i32> {
        self.base.create(dto).await
    }

    async fn update(&self, dto: UserEditDto) -> AppResult<()> {
        self.base.update(dto).await
    }

    /// Refuses to delete a user who still has pending or processing orders.
    async fn delete(&self, id: i32) -> AppResult<()> {
        if self.orders.has_active_orders_with_user(id).await? {
            return Err(AppError::conflict(format!(
                "User with ID {id} is associated with one or more orders and cannot be deleted."
            )));
        }

        self.base.delete(id).await
    }
}
