//! Product category service.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter};

use crate::dtos::{ProductCategoryDto, ProductCategoryEditDto};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::entities::product_category;
use crate::services::{CrudService, ProductService, Service};
use crate::types::{PageFilter, PageResult};

pub struct ProductCategoryService {
    base: Service<product_category::Entity, ProductCategoryDto, ProductCategoryEditDto>,
    products: Arc<ProductService>,
}

impl ProductCategoryService {
    pub fn new(db: DatabaseConnection, products: Arc<ProductService>) -> Self {
        Self {
            base: Service::new(db),
            products,
        }
    }

    /// True when a live category already exists with the same name and
    /// description.
    pub async fn is_duplicate(&self, dto: &ProductCategoryEditDto) -> AppResult<bool> {
        tracing::trace!(
            name = %dto.name,
            description = %dto.description,
            "checking for duplicate product category"
        );

        let found = self
            .base
            .query()
            .filter(product_category::Column::Name.eq(dto.name.as_str()))
            .filter(product_category::Column::Description.eq(dto.description.as_str()))
            .one(self.base.db())
            .await?;

        Ok(found.is_some())
    }
}

#[async_trait]
impl CrudService<ProductCategoryDto, ProductCategoryEditDto> for ProductCategoryService {
    async fn get_by_id(&self, id: i32) -> AppResult<Option<ProductCategoryDto>> {
        self.base.get_by_id(id).await
    }

    async fn get_all(&self) -> AppResult<Vec<ProductCategoryDto>> {
        self.base.get_all().await
    }

    async fn paginate(&self, filter: PageFilter) -> AppResult<PageResult<ProductCategoryDto>> {
        self.base.paginate(filter).await
    }

    async fn create(&self, dto: ProductCategoryEditDto) -> AppResult<i32> {
        self.base.create(dto).await
    }

    async fn update(&self, dto: ProductCategoryEditDto) -> AppResult<()> {
        self.base.update(dto).await
    }

    /// Refuses to delete a category that still has live products in it.
    async fn delete(&self, id: i32) -> AppResult<()> {
        let products_in_category = self.products.get_by_category_id(id).await?;
        if !products_in_category.is_empty() {
            return Err(AppError::conflict(
                "Cannot delete category because there are products associated with it.",
            ));
        }

        self.base.delete(id).await
    }
}
