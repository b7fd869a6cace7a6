//! User entity.

use sea_orm::entity::prelude::*;

use crate::infra::repositories::{BaseEntity, BaseModel, SoftDeletable};

/// Registered customer. Email is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
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
