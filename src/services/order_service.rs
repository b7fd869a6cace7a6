//! Order service.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter};

use crate::dtos::{OrderDto, OrderEditDto};
use crate::errors::AppResult;
use crate::infra::repositories::entities::{order, OrderStatus};
use crate::services::{CrudService, Service};
use crate::types::{PageFilter, PageResult};

/// States in which an order blocks deletion of the rows it references.
const ACTIVE_STATUSES: [OrderStatus; 2] = [OrderStatus::Pending, OrderStatus::Processing];

pub struct OrderService {
    base: Service<order::Entity, OrderDto, OrderEditDto>,
}

impl OrderService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: Service::new(db),
        }
    }

    /// True when a live order already exists for the same user, address and
    /// calendar day. Time of day is ignored.
    pub async fn is_duplicate(&self, dto: &OrderEditDto) -> AppResult<bool> {
        tracing::trace!(
            user_id = dto.user_id,
            address_id = dto.address_id,
            order_date = %dto.order_date,
            "checking for duplicate order"
        );

        let candidates = self
            .base
            .query()
            .filter(order::Column::UserId.eq(dto.user_id))
            .filter(order::Column::AddressId.eq(dto.address_id))
            .all(self.base.db())
            .await?;

        let day = dto.order_date.date_naive();
        Ok(candidates.iter().any(|o| o.order_date.date_naive() == day))
    }

    /// True when any pending or processing order ships to the address.
    pub async fn has_active_orders_with_address(&self, address_id: i32) -> AppResult<bool> {
        let found = self
            .base
            .query()
            .filter(order::Column::AddressId.eq(address_id))
            .filter(order::Column::Status.is_in(ACTIVE_STATUSES))
            .one(self.base.db())
            .await?;

        if found.is_some() {
            tracing::trace!(address_id, "address has pending or processing orders");
        }

        Ok(found.is_some())
    }

    /// True when any pending or processing order belongs to the user.
    pub async fn has_active_orders_with_user(&self, user_id: i32) -> AppResult<bool> {
        let found = self
            .base
            .query()
            .filter(order::Column::UserId.eq(user_id))
            .filter(order::Column::Status.is_in(ACTIVE_STATUSES))
            .one(self.base.db())
            .await?;

        if found.is_some() {
            tracing::trace!(user_id, "user has pending or processing orders");
        }

        Ok(found.is_some())
    }

    /// True when any pending or processing order contains the product.
    ///
    /// Product ids live in a JSON column, so membership is checked in memory
    /// after narrowing to active orders.
    pub async fn has_active_orders_with_product(&self, product_id: i32) -> AppResult<bool> {
        let active = self
            .base
            .query()
            .filter(order::Column::Status.is_in(ACTIVE_STATUSES))
            .all(self.base.db())
            .await?;

        Ok(active.iter().any(|o| o.product_ids.contains(product_id)))
    }
}

#[async_trait]
impl CrudService<OrderDto, OrderEditDto> for OrderService {
    async fn get_by_id(&self, id: i32) -> AppResult<Option<OrderDto>> {
        self.base.get_by_id(id).await
    }

    async fn get_all(&self) -> AppResult<Vec<OrderDto>> {
        self.base.get_all().await
    }

    async fn paginate(&self, filter: PageFilter) -> AppResult<PageResult<OrderDto>> {
        self.base.paginate(filter).await
    }

    async fn create(&self, dto: OrderEditDto) -> AppResult<i32> {
        self.base.create(dto).await
    }

    async fn update(&self, dto: OrderEditDto) -> AppResult<()> {
        self.base.update(dto).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.base.delete(id).await
    }
}
