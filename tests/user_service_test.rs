//! User service: email uniqueness and delete guards.

mod common;

use order_api::dtos::UserEditDto;
use order_api::errors::AppError;
use order_api::infra::repositories::entities::OrderStatus;
use order_api::services::{CrudService, Services};

use common::{at, seed_address, seed_order, seed_user, setup_db};

#[tokio::test]
async fn duplicate_is_detected_by_email_alone() {
    let db = setup_db().await;
    seed_user(&db, "Ada", "ada@example.com").await;
    let services = Services::from_connection(db);

    let same_email = UserEditDto {
        id: None,
        name: "Someone Else".to_string(),
        email: "ada@example.com".to_string(),
    };
    assert!(services.users.is_duplicate(&same_email).await.unwrap());

    let other_email = UserEditDto {
        id: None,
        name: "Ada".to_string(),
        email: "ada.other@example.com".to_string(),
    };
    assert!(!services.users.is_duplicate(&other_email).await.unwrap());
}

#[tokio::test]
async fn delete_is_blocked_while_the_user_has_active_orders() {
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

    let result = services.users.delete(user.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn delete_succeeds_without_active_orders() {
    let db = setup_db().await;
    let user = seed_user(&db, "Ada", "ada@example.com").await;
    let services = Services::from_connection(db);

    services.users.delete(user.id).await.unwrap();
    assert!(services.users.get_by_id(user.id).await.unwrap().is_none());
}
