//! Handler tests for the Items domain
//!
//! Drive the REST router with an in-memory repository: status codes, JSON
//! bodies and error responses.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::ErrorResponse;
use domain_items::*;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sea_orm::{ConnAcquireErr, DatabaseBackend, DbErr, MockDatabase, RuntimeErr};
use serde_json::json;
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn seeded_service() -> ItemService {
    let service = ItemService::new(InMemoryItemRepository::new());
    for (name, price) in [("Apple", 10), ("Pear", 5), ("Apple", 20)] {
        service
            .add_item(CreateItem::new(name, Decimal::from(price)))
            .await
            .unwrap();
    }
    service
}

#[tokio::test]
async fn test_create_item_returns_201_with_id() {
    let app = handlers::router(ItemService::new(InMemoryItemRepository::new()));

    let response = app
        .oneshot(post_json("/items", json!({"name": "Apple", "price": 10.5})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.id, ItemId(1));
    assert_eq!(item.name, "Apple");
    assert_eq!(item.price, Decimal::new(105, 1));
}

#[tokio::test]
async fn test_created_item_can_be_read_back() {
    let service = ItemService::new(InMemoryItemRepository::new());
    let app = handlers::router(service);

    let response = app
        .clone()
        .oneshot(post_json("/items", json!({"name": "Pear", "price": 3})))
        .await
        .unwrap();
    let created: Item = json_body(response.into_body()).await;

    let response = app
        .oneshot(get(&format!("/items/{}", created.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Item = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_item_rejects_invalid_input() {
    let service = ItemService::new(InMemoryItemRepository::new());
    let app = handlers::router(service.clone());

    for body in [
        json!({"name": "", "price": 1}),
        json!({"name": "Apple", "price": -1}),
        json!({"name": "Apple"}),
    ] {
        let response = app.clone().oneshot(post_json("/items", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    assert!(service.all_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_item_rejects_malformed_json() {
    let app = handlers::router(ItemService::new(InMemoryItemRepository::new()));

    let request = Request::builder()
        .method("POST")
        .uri("/items")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_get_missing_item_returns_404() {
    let app = handlers::router(ItemService::new(InMemoryItemRepository::new()));

    let response = app.oneshot(get("/items/42")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "NOT_FOUND");
    assert_eq!(error.message, "Item 42 not found");
}

#[tokio::test]
async fn test_get_item_with_non_numeric_id_returns_400() {
    let app = handlers::router(ItemService::new(InMemoryItemRepository::new()));

    let response = app.oneshot(get("/items/apple")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "INVALID_ID");
}

#[tokio::test]
async fn test_list_items_ordered_by_id() {
    let app = handlers::router(seeded_service().await);

    let response = app.oneshot(get("/items")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let items: Vec<Item> = json_body(response.into_body()).await;
    let ids: Vec<i64> = items.iter().map(|i| i.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_list_items_by_name() {
    let app = handlers::router(seeded_service().await);

    let response = app.clone().oneshot(get("/items?name=Apple")).await.unwrap();
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 2);

    let response = app.oneshot(get("/items?name=Banana")).await.unwrap();
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_list_items_cheaper_than() {
    let app = handlers::router(seeded_service().await);

    let response = app.oneshot(get("/items?cheaper_than=10")).await.unwrap();

    let items: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Pear");
}

#[tokio::test]
async fn test_delete_item_returns_200_even_when_missing() {
    let service = seeded_service().await;
    let app = handlers::router(service.clone());

    for uri in ["/items/1", "/items/1", "/items/999"] {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    assert_eq!(service.all_items().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_items_rejects_unparsable_price() {
    let app = handlers::router(seeded_service().await);

    let response = app
        .oneshot(get("/items?cheaper_than=cheap"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "INVALID_QUERY");
    assert!(error.message.contains("cheaper_than"));
}

fn failing_storage(err: DbErr) -> axum::Router {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([err])
        .into_connection();
    handlers::router(ItemService::new(PgItemRepository::new(db)))
}

#[tokio::test]
async fn test_storage_failures_return_500() {
    let failures = || {
        [
            DbErr::Conn(RuntimeErr::Internal("connection refused".to_string())),
            DbErr::ConnectionAcquire(ConnAcquireErr::Timeout),
            DbErr::Custom("relation \"items\" does not exist".to_string()),
        ]
    };

    for err in failures() {
        let response = failing_storage(err).oneshot(get("/items")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error: ErrorResponse = json_body(response.into_body()).await;
        assert!(!error.message.contains("relation"));
        assert!(!error.message.contains("refused"));
    }

    for err in failures() {
        let response = failing_storage(err)
            .oneshot(post_json("/items", json!({"name": "Apple", "price": 10})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
