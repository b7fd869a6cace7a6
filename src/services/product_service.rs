//! Product service.
//!
//! Read paths widen the projection to the category row so the DTO can carry
//! the category display name without a second round trip.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, PaginatorTrait, QueryFilter, Select, SelectTwo,
};

use crate::dtos::{ProductCodeDto, ProductDto, ProductEditDto};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::{product, product_category};
use crate::services::{CrudService, OrderService, Service};
use crate::types::{PageFilter, PageResult};

pub struct ProductService {
    base: Service<product::Entity, ProductDto, ProductEditDto>,
    orders: Arc<OrderService>,
}

impl ProductService {
    pub fn new(db: DatabaseConnection, orders: Arc<OrderService>) -> Self {
        Self {
            base: Service::new(db),
            orders,
        }
    }

    fn query_with_category(
        query: Select<product::Entity>,
    ) -> SelectTwo<product::Entity, product_category::Entity> {
        query.find_also_related(product_category::Entity)
    }

    /// A soft-deleted category leaves the product readable but nameless.
    fn to_dto((model, category): (product::Model, Option<product_category::Model>)) -> ProductDto {
        let category_name = category.filter(|c| !c.is_deleted).map(|c| c.name);
        let mut dto = ProductDto::from(model);
        dto.product_category_name = category_name;
        dto
    }

    /// True when a live product already exists with the same name in the
    /// same category.
    pub async fn is_duplicate(&self, dto: &ProductEditDto) -> AppResult<bool> {
        tracing::trace!(
            name = %dto.name,
            product_category_id = dto.product_category_id,
            "checking for duplicate product"
        );

        let found = self
            .base
            .query()
            .filter(product::Column::Name.eq(dto.name.as_str()))
            .filter(product::Column::ProductCategoryId.eq(dto.product_category_id))
            .one(self.base.db())
            .await?;

        Ok(found.is_some())
    }

    /// Live products belonging to the category.
    pub async fn get_by_category_id(&self, category_id: i32) -> AppResult<Vec<ProductDto>> {
        let rows = Self::query_with_category(
            self.base
                .query()
                .filter(product::Column::ProductCategoryId.eq(category_id)),
        )
        .all(self.base.db())
        .await?;

        Ok(rows.into_iter().map(Self::to_dto).collect())
    }

    /// Batch lookup used when validating order contents.
    pub async fn get_by_ids(&self, ids: &[i32]) -> AppResult<Vec<ProductDto>> {
        let rows = Self::query_with_category(
            self.base
                .query()
                .filter(product::Column::Id.is_in(ids.iter().copied())),
        )
        .all(self.base.db())
        .await?;

        Ok(rows.into_iter().map(Self::to_dto).collect())
    }

    /// Sum of the current prices of the given products.
    pub async fn sum_prices(&self, ids: &[i32]) -> AppResult<Decimal> {
        let models = self
            .base
            .query()
            .filter(product::Column::Id.is_in(ids.iter().copied()))
            .all(self.base.db())
            .await?;

        let sum: Decimal = models.iter().map(|p| p.price).sum();

        tracing::trace!(?ids, %sum, "summed product prices");

        Ok(sum)
    }

    /// Display codes for the given products. The code is the product name.
    pub async fn get_codes_by_ids(&self, ids: &[i32]) -> AppResult<Vec<ProductCodeDto>> {
        let models = self
            .base
            .query()
            .filter(product::Column::Id.is_in(ids.iter().copied()))
            .all(self.base.db())
            .await?;

        Ok(models
            .into_iter()
            .map(|p| ProductCodeDto {
                product_id: p.id,
                code: p.name,
            })
            .collect())
    }
}

#[async_trait]
impl CrudService<ProductDto, ProductEditDto> for ProductService {
    async fn get_by_id(&self, id: i32) -> AppResult<Option<ProductDto>> {
        let row = Self::query_with_category(
            self.base.query().filter(product::Column::Id.eq(id)),
        )
        .one(self.base.db())
        .await?;

        Ok(row.map(Self::to_dto))
    }

    async fn get_all(&self) -> AppResult<Vec<ProductDto>> {
        let rows = Self::query_with_category(self.base.query())
            .all(self.base.db())
            .await?;

        Ok(rows.into_iter().map(Self::to_dto).collect())
    }

    async fn paginate(&self, filter: PageFilter) -> AppResult<PageResult<ProductDto>> {
        filter.validate()?;

        let paginator = Self::query_with_category(self.base.query())
            .paginate(self.base.db(), filter.limit());
        let total_count = paginator.num_items().await?;
        let items: Vec<ProductDto> = paginator
            .fetch_page(filter.page_index())
            .await?
            .into_iter()
            .map(Self::to_dto)
            .collect();

        Ok(PageResult::new(items, total_count, &filter))
    }

    async fn create(&self, dto: ProductEditDto) -> AppResult<i32> {
        self.base.create(dto).await
    }

    async fn update(&self, dto: ProductEditDto) -> AppResult<()> {
        self.base.update(dto).await
    }

    /// Refuses to delete a product that pending or processing orders still
    /// contain.
    async fn delete(&self, id: i32) -> AppResult<()> {
        if self.orders.has_active_orders_with_product(id).await? {
            return Err(AppError::conflict(format!(
                "Product with ID {id} is associated with one or more orders and cannot be deleted."
            )));
        }

        self.base.delete(id).await
    }
}
