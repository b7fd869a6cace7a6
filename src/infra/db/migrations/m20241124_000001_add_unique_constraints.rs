//! Migration: Add the natural-key unique indexes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("ux_addresses_street_city_postal_code_country")
                    .table(Addresses::Table)
                    .col(Addresses::Street)
                    .col(Addresses::City)
                    .col(Addresses::PostalCode)
                    .col(Addresses::Country)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_product_categories_name_description")
                    .table(ProductCategories::Table)
                    .col(ProductCategories::Name)
                    .col(ProductCategories::Description)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_products_name_product_category_id")
                    .table(Products::Table)
                    .col(Products::Name)
                    .col(Products::ProductCategoryId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_orders_user_id_address_id_order_date")
                    .table(Orders::Table)
                    .col(Orders::UserId)
                    .col(Orders::AddressId)
                    .col(Orders::OrderDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("ux_orders_user_id_address_id_order_date")
                    .table(Orders::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_products_name_product_category_id")
                    .table(Products::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_product_categories_name_description")
                    .table(ProductCategories::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_users_email")
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_addresses_street_city_postal_code_country")
                    .table(Addresses::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Addresses {
    Table,
    Street,
    City,
    PostalCode,
    Country,
}

#[derive(Iden)]
enum Users {
    Table,
    Email,
}

#[derive(Iden)]
enum ProductCategories {
    Table,
    Name,
    Description,
}

#[derive(Iden)]
enum Products {
    Table,
    Name,
    ProductCategoryId,
}

#[derive(Iden)]
enum Orders {
    Table,
    UserId,
    AddressId,
    OrderDate,
}
