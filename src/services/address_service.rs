//! Address service.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter};

use crate::dtos::{AddressDto, AddressEditDto};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::address;
use crate::services::{CrudService, OrderService, Service};
use crate::types::{PageFilter, PageResult};

pub struct AddressService {
    base: Service<address::Entity, AddressDto, AddressEditDto>,
    orders: Arc<OrderService>,
}

impl AddressService {
    pub fn new(db: DatabaseConnection, orders: Arc<OrderService>) -> Self {
        Self {
            base: Service::new(db),
            orders,
        }
    }

    /// True when a live address already exists with the same street, city,
    /// postal code and country.
    pub async fn is_duplicate(&self, dto: &AddressEditDto) -> AppResult<bool> {
        tracing::trace!(
            street = %dto.street,
            city = %dto.city,
            postal_code = %dto.postal_code,
            country = %dto.country,
            "checking for duplicate address"
        );

        let found = self
            .base
            .query()
            .filter(address::Column::Street.eq(dto.street.as_str()))
            .filter(address::Column::City.eq(dto.city.as_str()))
            .filter(address::Column::PostalCode.eq(dto.postal_code.as_str()))
            .filter(address::Column::Country.eq(dto.country.as_str()))
            .one(self.base.db())
            .await?;

        Ok(found.is_some())
    }

    /// Batch lookup used when assembling order views.
    pub async fn get_by_ids(&self, ids: &[i32]) -> AppResult<Vec<AddressDto>> {
        let models = self
            .base
            .query()
            .filter(address::Column::Id.is_in(ids.iter().copied()))
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(AddressDto::from).collect())
    }
}

#[async_trait]
impl CrudService<AddressDto, AddressEditDto> for AddressService {
    async fn get_by_id(&self, id: i32) -> AppResult<Option<AddressDto>> {
        self.base.get_by_id(id).await
    }

    async fn get_all(&self) -> AppResult<Vec<AddressDto>> {
        self.base.get_all().await
    }

    async fn paginate(&self, filter: PageFilter) -> AppResult<PageResult<AddressDto>> {
        self.base.paginate(filter).await
    }

    async fn create(&self, dto: AddressEditDto) -> AppResult<i32> {
        self.base.create(dto).await
    }

    async fn update(&self, dto: AddressEditDto) -> AppResult<()> {
        self.base.update(dto).await
    }

    /// Refuses to delete an address that pending or processing orders still
    /// ship to.
    async fn delete(&self, id: i32) -> AppResult<()> {
        if self.orders.has_active_orders_with_address(id).await? {
            return Err(AppError::conflict(format!(
                "Address with ID {id} is associated with orders that are in 'Pending' or 'Processing' state and cannot be deleted."
            )));
        }

        self.base.delete(id).await
    }
}
