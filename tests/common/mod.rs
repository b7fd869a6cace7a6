//! Shared test fixtures: an in-memory database with the full schema.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, Schema, Set,
};

use order_api::infra::repositories::entities::{
    address, order, product, product_category, user, OrderStatus,
};

/// Fresh in-memory database with every entity table created.
pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    create_schema(&db).await;

    db
}

/// Create every entity table on an existing connection.
pub async fn create_schema(db: &DatabaseConnection) {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    for stmt in [
        schema.create_table_from_entity(address::Entity),
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(product_category::Entity),
        schema.create_table_from_entity(product::Entity),
        schema.create_table_from_entity(order::Entity),
    ] {
        db.execute(backend.build(&stmt))
            .await
            .expect("failed to create table");
    }
}

pub fn dec(value: &str) -> Decimal {
    value.parse().expect("invalid decimal literal")
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub async fn seed_address(db: &DatabaseConnection) -> address::Model {
    seed_address_in(db, "Via Roma 1", "Milan", "20121", "Italy").await
}

pub async fn seed_address_in(
    db: &DatabaseConnection,
    street: &str,
    city: &str,
    postal_code: &str,
    country: &str,
) -> address::Model {
    address::ActiveModel {
        street: Set(street.to_string()),
        city: Set(city.to_string()),
        postal_code: Set(postal_code.to_string()),
        country: Set(country.to_string()),
        is_deleted: Set(false),
        deleted_at: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to insert address")
}

pub async fn seed_user(db: &DatabaseConnection, name: &str, email: &str) -> user::Model {
    user::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        is_deleted: Set(false),
        deleted_at: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to insert user")
}

pub async fn seed_category(db: &DatabaseConnection, name: &str) -> product_category::Model {
    product_category::ActiveModel {
        name: Set(name.to_string()),
        description: Set(format!("{name} products")),
        is_deleted: Set(false),
        deleted_at: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to insert product category")
}

pub async fn seed_product(
    db: &DatabaseConnection,
    category_id: i32,
    name: &str,
    price: &str,
) -> product::Model {
    product::ActiveModel {
        name: Set(name.to_string()),
        price: Set(dec(price)),
        description: Set(format!("{name} description")),
        product_category_id: Set(category_id),
        is_deleted: Set(false),
        deleted_at: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to insert product")
}

pub async fn seed_order(
    db: &DatabaseConnection,
    user_id: i32,
    address_id: i32,
    product_ids: Vec<i32>,
    status: OrderStatus,
    order_date: DateTime<Utc>,
) -> order::Model {
    order::ActiveModel {
        user_id: Set(user_id),
        address_id: Set(address_id),
        order_date: Set(order_date),
        total_amount: Set(dec("0")),
        product_ids: Set(product_ids.into()),
        status: Set(status),
        is_deleted: Set(false),
        deleted_at: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to insert order")
}
