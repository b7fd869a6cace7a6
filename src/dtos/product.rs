//! Product DTOs.

use rust_decimal::Decimal;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::IntoActiveModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infra::repositories::entities::product;

/// Product read model, including the category display name when the
/// projection was widened to fetch the related row.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub product_category_id: i32,
    pub product_category_name: Option<String>,
}

impl From<product::Model> for ProductDto {
    fn from(model: product::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            description: model.description,
            product_category_id: model.product_category_id,
            product_category_name: None,
        }
    }
}

/// Product id plus its display code, used when assembling order views.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCodeDto {
    pub product_id: i32,
    pub code: String,
}

/// Product write model.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductEditDto {
    /// Ignored on create; must match the route id on update.
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub price: Decimal,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(range(min = 1, message = "ProductCategoryId is required"))]
    pub product_category_id: i32,
}

impl IntoActiveModel<product::ActiveModel> for ProductEditDto {
    fn into_active_model(self) -> product::ActiveModel {
        product::ActiveModel {
            id: self.id.map_or(NotSet, Set),
            name: Set(self.name),
            price: Set(self.price),
            description: Set(self.description),
            product_category_id: Set(self.product_category_id),
            is_deleted: Set(false),
            deleted_at: Set(None),
        }
    }
}
