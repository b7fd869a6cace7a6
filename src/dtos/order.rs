//! Order DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::IntoActiveModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::infra::repositories::entities::{order, OrderStatus};

/// Order read model.
///
/// `user_name`, `address_full`, and `product_codes` are denormalized display
/// fields assembled per-request at the handler layer; they are never
/// persisted.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i32,
    pub user_id: i32,
    pub user_name: Option<String>,
    pub address_id: i32,
    pub address_full: Option<String>,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub product_ids: Vec<i32>,
    pub product_codes: Vec<String>,
    pub status: OrderStatus,
}

impl From<order::Model> for OrderDto {
    fn from(model: order::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            user_name: None,
            address_id: model.address_id,
            address_full: None,
            order_date: model.order_date,
            total_amount: model.total_amount,
            product_ids: model.product_ids.0,
            product_codes: Vec::new(),
            status: model.status,
        }
    }
}

/// Order write model.
///
/// `total_amount` is recomputed server-side from the referenced products'
/// current prices; any client-supplied value is overwritten.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderEditDto {
    /// Ignored on create; must match the route id on update.
    pub id: Option<i32>,
    #[validate(range(min = 1, message = "UserId is required"))]
    pub user_id: i32,
    #[validate(range(min = 1, message = "AddressId is required"))]
    pub address_id: i32,
    pub order_date: DateTime<Utc>,
    #[serde(default)]
    pub total_amount: Decimal,
    #[validate(length(min = 1, message = "At least one product is required"))]
    pub product_ids: Vec<i32>,
    pub status: OrderStatus,
}

impl IntoActiveModel<order::ActiveModel> for OrderEditDto {
    fn into_active_model(self) -> order::ActiveModel {
        order::ActiveModel {
            id: self.id.map_or(NotSet, Set),
            user_id: Set(self.user_id),
            address_id: Set(self.address_id),
            order_date: Set(self.order_date),
            total_amount: Set(self.total_amount),
            product_ids: Set(self.product_ids.into()),
            status: Set(self.status),
            is_deleted: Set(false),
            deleted_at: Set(None),
        }
    }
}
