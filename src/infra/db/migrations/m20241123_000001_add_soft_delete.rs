//! Migration: Add soft delete columns to every entity table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const TABLES: [Tables; 5] = [
    Tables::Addresses,
    Tables::Users,
    Tables::ProductCategories,
    Tables::Products,
    Tables::Orders,
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in TABLES {
            manager
                .alter_table(
                    Table::alter()
                        .table(table)
                        .add_column(
                            ColumnDef::new(SoftDelete::IsDeleted)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .alter_table(
                    Table::alter()
                        .table(table)
                        .add_column(
                            ColumnDef::new(SoftDelete::DeletedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            // Every read path filters on is_deleted
            manager
                .create_index(
                    Index::create()
                        .name(format!("idx_{}_is_deleted", table.to_string()))
                        .table(table)
                        .col(SoftDelete::IsDeleted)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in TABLES {
            manager
                .drop_index(
                    Index::drop()
                        .name(format!("idx_{}_is_deleted", table.to_string()))
                        .table(table)
                        .to_owned(),
                )
                .await?;

            manager
                .alter_table(
                    Table::alter()
                        .table(table)
                        .drop_column(SoftDelete::DeletedAt)
                        .to_owned(),
                )
                .await?;

            manager
                .alter_table(
                    Table::alter()
                        .table(table)
                        .drop_column(SoftDelete::IsDeleted)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden, Clone, Copy)]
enum Tables {
    Addresses,
    Users,
    ProductCategories,
    Products,
    Orders,
}

#[derive(Iden)]
enum SoftDelete {
    IsDeleted,
    DeletedAt,
}
