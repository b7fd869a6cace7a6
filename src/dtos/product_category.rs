//! Product category DTOs.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::IntoActiveModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infra::repositories::entities::product_category;

/// Product category read model.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryDto {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<product_category::Model> for ProductCategoryDto {
    fn from(model: product_category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

/// Product category write model.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryEditDto {
    /// Ignored on create; must match the route id on update.
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

impl IntoActiveModel<product_category::ActiveModel> for ProductCategoryEditDto {
    fn into_active_model(self) -> product_category::ActiveModel {
        product_category::ActiveModel {
            id: self.id.map_or(NotSet, Set),
            name: Set(self.name),
            description: Set(self.description),
            is_deleted: Set(false),
            deleted_at: Set(None),
        }
    }
}
