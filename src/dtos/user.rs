//! User DTOs.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::IntoActiveModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infra::repositories::entities::user;

/// User read model.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<user::Model> for UserDto {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
        }
    }
}

/// User write model.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserEditDto {
    /// Ignored on create; must match the route id on update.
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

impl IntoActiveModel<user::ActiveModel> for UserEditDto {
    fn into_active_model(self) -> user::ActiveModel {
        user::ActiveModel {
            id: self.id.map_or(NotSet, Set),
            name: Set(self.name),
            email: Set(self.email),
            is_deleted: Set(false),
            deleted_at: Set(None),
        }
    }
}
