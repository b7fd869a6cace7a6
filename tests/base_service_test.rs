//! Generic CRUD service behavior, exercised through the address entity.

mod common;

use order_api::dtos::{AddressDto, AddressEditDto};
use order_api::errors::AppError;
use order_api::infra::repositories::entities::address;
use order_api::services::{CrudService, Service};
use order_api::types::PageFilter;

use common::{seed_address_in, setup_db};

type AddressCrud = Service<address::Entity, AddressDto, AddressEditDto>;

fn edit_dto(street: &str) -> AddressEditDto {
    AddressEditDto {
        id: None,
        street: street.to_string(),
        city: "Milan".to_string(),
        postal_code: "20121".to_string(),
        country: "Italy".to_string(),
    }
}

#[tokio::test]
async fn create_assigns_id_and_ignores_the_client_supplied_one() {
    let db = setup_db().await;
    let service = AddressCrud::new(db);

    let mut dto = edit_dto("Via Roma 1");
    dto.id = Some(999);

    let id = service.create(dto).await.unwrap();
    assert_ne!(id, 999);

    let fetched = service.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(fetched.street, "Via Roma 1");
    assert_eq!(fetched.full_address, "Via Roma 1, Milan, Italy");

    assert!(service.get_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn get_all_on_an_empty_table_returns_an_empty_vec() {
    let db = setup_db().await;
    let service = AddressCrud::new(db);

    assert!(service.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_the_row() {
    let db = setup_db().await;
    let service = AddressCrud::new(db);

    let id = service.create(edit_dto("Via Roma 1")).await.unwrap();

    let mut changed = edit_dto("Via Roma 1");
    changed.id = Some(id);
    changed.city = "Rome".to_string();
    service.update(changed).await.unwrap();

    let fetched = service.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(fetched.city, "Rome");
}

#[tokio::test]
async fn delete_hides_the_row_from_reads() {
    let db = setup_db().await;
    let service = AddressCrud::new(db);

    let id = service.create(edit_dto("Via Roma 1")).await.unwrap();
    service.delete(id).await.unwrap();

    assert!(service.get_by_id(id).await.unwrap().is_none());
    assert!(service.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn paginate_returns_the_requested_page_and_the_total_count() {
    let db = setup_db().await;
    for i in 0..5 {
        seed_address_in(&db, &format!("Via Roma {i}"), "Milan", "20121", "Italy").await;
    }
    let service = AddressCrud::new(db);

    let page = service
        .paginate(PageFilter {
            page_number: 2,
            page_size: 2,
        })
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_count, 5);
    assert_eq!(page.page_number, 2);
    assert_eq!(page.page_size, 2);

    let last = service
        .paginate(PageFilter {
            page_number: 3,
            page_size: 2,
        })
        .await
        .unwrap();
    assert_eq!(last.items.len(), 1);
}

#[tokio::test]
async fn paginate_excludes_deleted_rows_from_the_total() {
    let db = setup_db().await;
    let first = seed_address_in(&db, "Via Roma 1", "Milan", "20121", "Italy").await;
    seed_address_in(&db, "Via Roma 2", "Milan", "20121", "Italy").await;
    let service = AddressCrud::new(db);

    service.delete(first.id).await.unwrap();

    let page = service.paginate(PageFilter::default()).await.unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn paginate_rejects_non_positive_parameters() {
    let db = setup_db().await;
    let service = AddressCrud::new(db);

    let bad_number = service
        .paginate(PageFilter {
            page_number: 0,
            page_size: 10,
        })
        .await;
    assert!(matches!(bad_number, Err(AppError::BadRequest(_))));

    let bad_size = service
        .paginate(PageFilter {
            page_number: 1,
            page_size: 0,
        })
        .await;
    assert!(matches!(bad_size, Err(AppError::BadRequest(_))));

    let negative_number = service
        .paginate(PageFilter {
            page_number: -1,
            page_size: 10,
        })
        .await;
    assert!(matches!(negative_number, Err(AppError::BadRequest(_))));

    let negative_size = service
        .paginate(PageFilter {
            page_number: 1,
            page_size: -10,
        })
        .await;
    assert!(matches!(negative_size, Err(AppError::BadRequest(_))));
}
