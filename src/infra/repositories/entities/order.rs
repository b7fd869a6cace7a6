//! Order entity.

use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::infra::repositories::{BaseEntity, BaseModel, SoftDeletable};

/// Order lifecycle states.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "processing")]
    Processing,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Product ids referenced by an order, stored as a JSON array.
///
/// There is no enforced foreign key on this collection; existence of the
/// referenced products is checked at the application level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ProductIds(pub Vec<i32>);

impl ProductIds {
    pub fn contains(&self, product_id: i32) -> bool {
        self.0.contains(&product_id)
    }
}

impl From<Vec<i32>> for ProductIds {
    fn from(ids: Vec<i32>) -> Self {
        Self(ids)
    }
}

/// Customer order. (user_id, address_id, order_date) is unique together.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub address_id: i32,
    pub order_date: DateTimeUtc,
    /// Recomputed server-side from current product prices at write time.
    pub total_amount: Decimal,
    #[sea_orm(column_type = "Json")]
    pub product_ids: ProductIds,
    pub status: OrderStatus,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDeletable for Entity {
    fn is_deleted_column() -> Column {
        Column::IsDeleted
    }

    fn deleted_at_column() -> Column {
        Column::DeletedAt
    }
}

impl BaseEntity for Entity {
    fn id_column() -> Column {
        Column::Id
    }
}

impl BaseModel for Model {
    fn id(&self) -> i32 {
        self.id
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn deleted_at(&self) -> Option<DateTimeUtc> {
        self.deleted_at
    }
}
