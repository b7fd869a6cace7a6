//! Integration tests for the HTTP surface.
//!
//! The router runs against an in-memory database; requests go through the
//! full extractor, handler and error-conversion stack.

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use order_api::api::{create_router, AppState};
use order_api::config::Config;
use order_api::infra::Database;
use order_api::infra::repositories::entities::OrderStatus;

use common::{at, seed_address, seed_category, seed_order, seed_product, seed_user};

async fn setup_app() -> (Router, DatabaseConnection) {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
    };

    let database = Database::connect_without_migrations(&config)
        .await
        .expect("failed to open in-memory database");
    let conn = database.get_connection();
    common::create_schema(&conn).await;

    let state = AppState::from_database(Arc::new(database));
    (create_router(state), conn)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn address_crud_round_trip() {
    let (app, _conn) = setup_app().await;

    let payload = json!({
        "street": "Via Roma 1",
        "city": "Milan",
        "postalCode": "20121",
        "country": "Italy"
    });

    let created = app
        .clone()
        .oneshot(json_request("POST", "/api/addresses", payload.clone()))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created_body = body_json(created).await;
    let id = created_body["id"].as_i64().unwrap();

    let fetched = app
        .clone()
        .oneshot(get_request(&format!("/api/addresses/{id}")))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched_body = body_json(fetched).await;
    assert_eq!(fetched_body["fullAddress"], "Via Roma 1, Milan, Italy");

    // A second identical create is rejected
    let duplicate = app
        .clone()
        .oneshot(json_request("POST", "/api/addresses", payload))
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);

    let deleted = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/addresses/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = app
        .clone()
        .oneshot(get_request(&format!("/api/addresses/{id}")))
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn negative_paging_parameters_fail_with_the_error_envelope() {
    let (app, _conn) = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/addresses/paginate",
            json!({ "pageNumber": -1, "pageSize": 10 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert_eq!(
        body["error"]["message"],
        "pageNumber must be greater than zero."
    );

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/addresses/paginate",
            json!({ "pageNumber": 1, "pageSize": -10 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_required_fields_fail_validation() {
    let (app, _conn) = setup_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({ "name": "", "email": "not-an-email" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_create_recomputes_the_total_and_reads_are_enriched() {
    let (app, conn) = setup_app().await;

    let user = seed_user(&conn, "Ada", "ada@example.com").await;
    let address = seed_address(&conn).await;
    let category = seed_category(&conn, "Prints").await;
    let book = seed_product(&conn, category.id, "Photo book", "19.90").await;
    let calendar = seed_product(&conn, category.id, "Calendar", "12.10").await;

    let created = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/orders",
            json!({
                "userId": user.id,
                "addressId": address.id,
                "orderDate": "2024-11-24T10:00:00Z",
                "totalAmount": "1.00",
                "productIds": [book.id, calendar.id],
                "status": "pending"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created_body = body_json(created).await;
    // The client-supplied total is ignored
    let total: rust_decimal::Decimal = created_body["totalAmount"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(total, common::dec("32"));
    let id = created_body["id"].as_i64().unwrap();

    let fetched = app
        .clone()
        .oneshot(get_request(&format!("/api/orders/{id}")))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    let order = body_json(fetched).await;
    assert_eq!(order["userName"], "Ada");
    assert_eq!(order["addressFull"], "Via Roma 1, Milan, Italy");
    assert_eq!(order["productCodes"], json!(["Photo book", "Calendar"]));
}

#[tokio::test]
async fn order_create_rejects_unknown_references() {
    let (app, conn) = setup_app().await;

    let user = seed_user(&conn, "Ada", "ada@example.com").await;
    let address = seed_address(&conn).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/orders",
            json!({
                "userId": user.id,
                "addressId": address.id,
                "orderDate": "2024-11-24T10:00:00Z",
                "productIds": [12345],
                "status": "pending"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_with_mismatched_route_and_body_ids_is_rejected() {
    let (app, conn) = setup_app().await;

    let user = seed_user(&conn, "Ada", "ada@example.com").await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/users/{}", user.id),
            json!({
                "id": user.id + 1,
                "name": "Ada",
                "email": "ada@example.com"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn guarded_delete_surfaces_as_conflict() {
    let (app, conn) = setup_app().await;

    let user = seed_user(&conn, "Ada", "ada@example.com").await;
    let address = seed_address(&conn).await;
    seed_order(
        &conn,
        user.id,
        address.id,
        vec![1],
        OrderStatus::Pending,
        at(2024, 11, 24, 9, 0),
    )
    .await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/addresses/{}", address.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
