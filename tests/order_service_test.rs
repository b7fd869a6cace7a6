//! Order service predicates: duplicate detection and referential checks.

mod common;

use order_api::dtos::OrderEditDto;
use order_api::infra::repositories::entities::OrderStatus;
use order_api::services::Services;

use common::{at, dec, seed_address, seed_order, seed_user, setup_db};

fn order_dto(user_id: i32, address_id: i32, date: chrono::DateTime<chrono::Utc>) -> OrderEditDto {
    OrderEditDto {
        id: None,
        user_id,
        address_id,
        order_date: date,
        total_amount: dec("0"),
        product_ids: vec![1],
        status: OrderStatus::Pending,
    }
}

#[tokio::test]
async fn same_day_order_is_a_duplicate_regardless_of_time() {
    let db = setup_db().await;
    let user = seed_user(&db, "Ada", "ada@example.com").await;
    let address = seed_address(&db).await;
    seed_order(
        &db,
        user.id,
        address.id,
        vec![1],
        OrderStatus::Pending,
        at(2024, 11, 24, 9, 0),
    )
    .await;
    let services = Services::from_connection(db);

    let same_day = order_dto(user.id, address.id, at(2024, 11, 24, 18, 30));
    assert!(services.orders.is_duplicate(&same_day).await.unwrap());

    let next_day = order_dto(user.id, address.id, at(2024, 11, 25, 9, 0));
    assert!(!services.orders.is_duplicate(&next_day).await.unwrap());
}

#[tokio::test]
async fn different_user_or_address_is_not_a_duplicate() {
    let db = setup_db().await;
    let user = seed_user(&db, "Ada", "ada@example.com").await;
    let other_user = seed_user(&db, "Bea", "bea@example.com").await;
    let address = seed_address(&db).await;
    seed_order(
        &db,
        user.id,
        address.id,
        vec![1],
        OrderStatus::Pending,
        at(2024, 11, 24, 9, 0),
    )
    .await;
    let services = Services::from_connection(db);

    let other = order_dto(other_user.id, address.id, at(2024, 11, 24, 12, 0));
    assert!(!services.orders.is_duplicate(&other).await.unwrap());
}

#[tokio::test]
async fn active_order_predicates_respect_status() {
    let db = setup_db().await;
    let user = seed_user(&db, "Ada", "ada@example.com").await;
    let address = seed_address(&db).await;
    seed_order(
        &db,
        user.id,
        address.id,
        vec![7],
        OrderStatus::Completed,
        at(2024, 11, 20, 9, 0),
    )
    .await;
    seed_order(
        &db,
        user.id,
        address.id,
        vec![8],
        OrderStatus::Cancelled,
        at(2024, 11, 21, 9, 0),
    )
    .await;
    let services = Services::from_connection(db);

    // Completed and cancelled orders do not block anything
    assert!(!services
        .orders
        .has_active_orders_with_user(user.id)
        .await
        .unwrap());
    assert!(!services
        .orders
        .has_active_orders_with_address(address.id)
        .await
        .unwrap());
    assert!(!services
        .orders
        .has_active_orders_with_product(7)
        .await
        .unwrap());
}

#[tokio::test]
async fn product_membership_is_checked_inside_the_json_list() {
    let db = setup_db().await;
    let user = seed_user(&db, "Ada", "ada@example.com").await;
    let address = seed_address(&db).await;
    seed_order(
        &db,
        user.id,
        address.id,
        vec![1, 2],
        OrderStatus::Processing,
        at(2024, 11, 24, 9, 0),
    )
    .await;
    let services = Services::from_connection(db);

    assert!(services
        .orders
        .has_active_orders_with_product(2)
        .await
        .unwrap());
    assert!(!services
        .orders
        .has_active_orders_with_product(3)
        .await
        .unwrap());
}
