//! Address DTOs.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::IntoActiveModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infra::repositories::entities::address;

/// Address read model.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub id: i32,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    /// Display form: "street, city, country".
    pub full_address: String,
}

impl From<address::Model> for AddressDto {
    fn from(model: address::Model) -> Self {
        let full_address = format!("{}, {}, {}", model.street, model.city, model.country);
        Self {
            id: model.id,
            street: model.street,
            city: model.city,
            postal_code: model.postal_code,
            country: model.country,
            full_address,
        }
    }
}

/// Address write model.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressEditDto {
    /// Ignored on create; must match the route id on update.
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "PostalCode is required"))]
    pub postal_code: String,
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
}

impl IntoActiveModel<address::ActiveModel> for AddressEditDto {
    fn into_active_model(self) -> address::ActiveModel {
        address::ActiveModel {
            id: self.id.map_or(NotSet, Set),
            street: Set(self.street),
            city: Set(self.city),
            postal_code: Set(self.postal_code),
            country: Set(self.country),
            is_deleted: Set(false),
            deleted_at: Set(None),
        }
    }
}
