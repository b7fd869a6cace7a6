//! Product service: widened category projection, price sums and delete guards.

mod common;

use order_api::errors::AppError;
use order_api::infra::repositories::entities::OrderStatus;
use order_api::services::{CrudService, Services};
use order_api::types::PageFilter;

use common::{at, dec, seed_address, seed_category, seed_order, seed_product, seed_user, setup_db};

#[tokio::test]
async fn get_by_id_carries_the_category_name() {
    let db = setup_db().await;
    let category = seed_category(&db, "Prints").await;
    let product = seed_product(&db, category.id, "Photo book", "19.90").await;
    let services = Services::from_connection(db);

    let dto = services
        .products
        .get_by_id(product.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(dto.product_category_name.as_deref(), Some("Prints"));
    assert_eq!(dto.price, dec("19.90"));
}

#[tokio::test]
async fn category_name_is_dropped_when_the_category_is_deleted() {
    use sea_orm::{ActiveModelTrait, ActiveValue::Set, IntoActiveModel};

    let db = setup_db().await;
    let category = seed_category(&db, "Prints").await;
    let product = seed_product(&db, category.id, "Photo book", "19.90").await;
    let services = Services::from_connection(db.clone());

    // The guarded delete refuses while the category holds a product, so
    // flip the flag directly to simulate a historically deleted category.
    let mut active = category.into_active_model();
    active.is_deleted = Set(true);
    active.update(&db).await.unwrap();

    let dto = services
        .products
        .get_by_id(product.id)
        .await
        .unwrap()
        .unwrap();
    assert!(dto.product_category_name.is_none());
}

#[tokio::test]
async fn sum_prices_adds_the_current_prices() {
    let db = setup_db().await;
    let category = seed_category(&db, "Prints").await;
    let a = seed_product(&db, category.id, "Photo book", "19.90").await;
    let b = seed_product(&db, category.id, "Calendar", "12.10").await;
    let services = Services::from_connection(db);

    let total = services.products.sum_prices(&[a.id, b.id]).await.unwrap();
    assert_eq!(total, dec("32.00"));
}

#[tokio::test]
async fn product_codes_are_the_product_names() {
    let db = setup_db().await;
    let category = seed_category(&db, "Prints").await;
    let a = seed_product(&db, category.id, "Photo book", "19.90").await;
    let services = Services::from_connection(db);

    let codes = services.products.get_codes_by_ids(&[a.id]).await.unwrap();
    assert_eq!(codes.len(), 1);
    assert_eq!(codes[0].product_id, a.id);
    assert_eq!(codes[0].code, "Photo book");
}

#[tokio::test]
async fn paginate_keeps_the_widened_projection() {
    let db = setup_db().await;
    let category = seed_category(&db, "Prints").await;
    for i in 0..3 {
        seed_product(&db, category.id, &format!("Item {i}"), "5.00").await;
    }
    let services = Services::from_connection(db);

    let page = services
        .products
        .paginate(PageFilter {
            page_number: 1,
            page_size: 2,
        })
        .await
        .unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_count, 3);
    assert!(page
        .items
        .iter()
        .all(|p| p.product_category_name.as_deref() == Some("Prints")));
}

#[tokio::test]
async fn delete_is_blocked_while_an_active_order_contains_the_product() {
    let db = setup_db().await;
    let category = seed_category(&db, "Prints").await;
    let product = seed_product(&db, category.id, "Photo book", "19.90").await;
    let user = seed_user(&db, "Ada", "ada@example.com").await;
    let address = seed_address(&db).await;
    seed_order(
        &db,
        user.id,
        address.id,
        vec![product.id],
        OrderStatus::Processing,
        at(2024, 11, 24, 9, 0),
    )
    .await;
    let services = Services::from_connection(db);

    let result = services.products.delete(product.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn category_delete_is_blocked_while_it_still_has_products() {
    let db = setup_db().await;
    let category = seed_category(&db, "Prints").await;
    seed_product(&db, category.id, "Photo book", "19.90").await;
    let services = Services::from_connection(db);

    let result = services.product_categories.delete(category.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}
