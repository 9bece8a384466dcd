//! Router-level tests through `tower::ServiceExt::oneshot` against a seeded
//! PostgreSQL container

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use product_catalog::api::create_router;
use product_catalog::application::builder::ApplicationBuilder;

fn app(db: &common::CatalogDb) -> Router {
    let state = ApplicationBuilder::new(common::test_config())
        .with_pool(db.pool.clone())
        .with_infrastructure()
        .expect("repositories")
        .build()
        .expect("application state");
    create_router(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_search_endpoint() {
    let db = common::start_catalog().await;
    let app = app(&db);

    let (status, body) = get(
        &app,
        "/v1/products?categories=Shoes&categories=Sale&sortBy=name&sortDirection=desc",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(body["products"][0]["sku"], "SKU-003");
    assert!(body["products"][0]["createdAt"].is_string());

    let (status, body) = get(
        &app,
        "/v1/products?attributes%5Bcolor%5D=red&attributes%5Bsize%5D=M",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["products"][0]["id"], 1);

    let (status, body) = get(&app, "/v1/products?categories=Shoes&page=2&pageSize=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 25);
    assert_eq!(body["products"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_search_validation_errors() {
    let db = common::start_catalog().await;
    let app = app(&db);

    let (status, body) = get(&app, "/v1/products?sortBy=name&sortDirection=sideways").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("asc, ascending, desc, descending"));

    let (status, _) = get(&app, "/v1/products?page=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/v1/products?page=0&pageSize=1000").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(&app, "/v1/products?minPrice=cheap").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("minPrice"));
}

#[tokio::test]
async fn test_product_detail_endpoint() {
    let db = common::start_catalog().await;
    let app = app(&db);

    let (status, body) = get(&app, "/v1/products/1?language=de").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Produkt 001");
    assert_eq!(body["language"], "de");
    assert_eq!(body["prices"][0]["cents"], 2500);

    let (status, _) = get(&app, "/v1/products/26").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/v1/products/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/v1/products/1?language=deutsch").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_category_and_health_endpoints() {
    let db = common::start_catalog().await;
    let app = app(&db);

    let (status, body) = get(&app, "/v1/categories/tree").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 4);
    assert_eq!(body["roots"][0]["name"], "Clothing");

    let (status, body) = get(&app, "/v1/categories/2/tree").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["children"][0]["name"], "Boots");

    let (status, _) = get(&app, "/v1/categories/99/tree").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(&app, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "connected");
}
