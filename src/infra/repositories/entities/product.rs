//! Product entity.

use sea_orm::entity::prelude::*;

use crate::infra::repositories::{BaseEntity, BaseModel, SoftDeletable};

/// Sellable product. (name, product_category_id) is unique together.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub product_category_id: i32,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_category::Entity",
        from = "Column::ProductCategoryId",
        to = "super::product_category::Column::Id"
    )]
    ProductCategory,
}

impl Related<super::product_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductCategory.def()
    }
}

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
