//! Address service: duplicate detection and delete guards.

mod common;

use order_api::dtos::AddressEditDto;
use order_api::errors::AppError;
use order_api::infra::repositories::entities::OrderStatus;
use order_api::services::{CrudService, Services};

use common::{at, seed_address, seed_order, seed_user, setup_db};

fn dto_like_seed() -> AddressEditDto {
    AddressEditDto {
        id: None,
        street: "Via Roma 1".to_string(),
        city: "Milan".to_string(),
        postal_code: "20121".to_string(),
        country: "Italy".to_string(),
    }
}

#[tokio::test]
async fn duplicate_requires_all_four_fields_to_match() {
    let db = setup_db().await;
    seed_address(&db).await;
    let services = Services::from_connection(db);

    assert!(services.addresses.is_duplicate(&dto_like_seed()).await.unwrap());

    let mut other_postal = dto_like_seed();
    other_postal.postal_code = "20122".to_string();
    assert!(!services.addresses.is_duplicate(&other_postal).await.unwrap());
}

#[tokio::test]
async fn soft_deleted_rows_do_not_count_as_duplicates() {
    let db = setup_db().await;
    let seeded = seed_address(&db).await;
    let services = Services::from_connection(db);

    services.addresses.delete(seeded.id).await.unwrap();

    assert!(!services.addresses.is_duplicate(&dto_like_seed()).await.unwrap());
}

#[tokio::test]
async fn delete_is_blocked_while_active_orders_reference_the_address() {
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

    let result = services.addresses.delete(address.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    // The address is still readable
    assert!(services
        .addresses
        .get_by_id(address.id)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn delete_succeeds_once_orders_are_settled() {
    let db = setup_db().await;
    let user = seed_user(&db, "Ada", "ada@example.com").await;
    let address = seed_address(&db).await;
    seed_order(
        &db,
        user.id,
        address.id,
        vec![1],
        OrderStatus::Completed,
        at(2024, 11, 24, 9, 0),
    )
    .await;
    let services = Services::from_connection(db);

    services.addresses.delete(address.id).await.unwrap();
    assert!(services
        .addresses
        .get_by_id(address.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn batch_lookup_returns_only_requested_live_rows() {
    let db = setup_db().await;
    let first = seed_address(&db).await;
    let second = common::seed_address_in(&db, "Via Dante 2", "Turin", "10121", "Italy").await;
    let services = Services::from_connection(db);

    let found = services
        .addresses
        .get_by_ids(&[first.id, second.id, 9999])
        .await
        .unwrap();
    assert_eq!(found.len(), 2);
}
