//! Handler tests for the Products domain
//!
//! These drive the real router over the in-memory use case:
//! - Request decoding (path, query, JSON body)
//! - Response encoding and status codes
//! - Error bodies for rejected requests
//!
//! Authentication is not exercised here; the principal is injected as a
//! request extension the way the JWT middleware would.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use axum_helpers::{ErrorResponse, Principal};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    let principal = Principal {
        id: "scanner-7".to_string(),
        email: "scanner7@example.com".to_string(),
        name: "Scanner Seven".to_string(),
        roles: vec!["staff".to_string()],
    };

    Router::new()
        .nest(BASE_PATH, handlers::router(InMemoryProductUseCase::new()))
        .layer(axum::Extension(principal))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Body) {
    let body = match body {
        Some(value) => Body::from(serde_json::to_string(&value).unwrap()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    (response.status(), response.into_body())
}

#[tokio::test]
async fn test_product_lifecycle() {
    let app = app();

    let (status, body) = call(
        &app,
        "POST",
        "/product/create",
        Some(json!({"name": "Kettle", "price": 30})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id: i64 = json_body(body).await;
    assert_eq!(id, 1);

    let (status, body) = call(&app, "GET", "/product/get/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let product: Value = json_body(body).await;
    assert_eq!(product, json!({"id": 1, "name": "Kettle", "price": 30}));

    let (status, body) = call(
        &app,
        "POST",
        "/product/update/1",
        Some(json!({"id": 99, "name": "Steel Kettle", "price": 35})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ack: SuccessfulRequest = json_body(body).await;
    assert!(ack.success);

    let (_, body) = call(&app, "GET", "/product/get/1", None).await;
    let product: Product = json_body(body).await;
    assert_eq!(product.id, 1);
    assert_eq!(product.attributes["name"], "Steel Kettle");

    let (status, _) = call(&app, "DELETE", "/product/delete/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, "GET", "/product/get/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(body).await;
    assert_eq!(error.error, "NOT_FOUND");
}

#[tokio::test]
async fn test_list_paginates_and_orders() {
    let app = app();
    for name in ["Anvil", "Kettle", "Teapot"] {
        let (status, _) = call(&app, "POST", "/product/create", Some(json!({"name": name}))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = call(&app, "GET", "/product/list", None).await;
    assert_eq!(status, StatusCode::OK);
    let page: Page<Product> = json_body(body).await;
    let ids: Vec<_> = page.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);

    let (_, body) = call(
        &app,
        "GET",
        "/product/list?page=1&limit=2&orderBy=name&ordinationAsc=true",
        None,
    )
    .await;
    let page: Page<Product> = json_body(body).await;
    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].attributes["name"], "Teapot");

    let (status, body) = call(&app, "GET", "/product/list?page=1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(body).await;
    assert_eq!(error.error, "INVALID_PARAMETER");
}

#[tokio::test]
async fn test_read_product_flow() {
    let app = app();
    call(&app, "POST", "/product/create", Some(json!({"name": "Kettle"}))).await;

    let (status, _) = call(
        &app,
        "POST",
        "/product/read-product",
        Some(json!({"code": "1", "type": "barcode"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(
        &app,
        "POST",
        "/product/read-product",
        Some(json!({"code": "1", "type": "qrcode"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, "GET", "/product/list/read-product?orderBy=id", None).await;
    assert_eq!(status, StatusCode::OK);
    let page: Page<ReadProduct> = json_body(body).await;
    assert_eq!(page.total, 2);
    assert!(page.items.iter().all(|r| r.product_id == 1 && r.read_by == "scanner-7"));

    let (status, _) = call(&app, "POST", "/product/read-product/delete/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, "GET", "/product/list/read-product", None).await;
    let page: Page<ReadProduct> = json_body(body).await;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, 2);
}

#[tokio::test]
async fn test_read_product_rejections() {
    let app = app();

    let (status, body) = call(
        &app,
        "POST",
        "/product/read-product",
        Some(json!({"code": "", "type": "barcode"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(body).await;
    assert_eq!(error.error, "INVALID_PARAMETER");

    let (status, body) = call(
        &app,
        "POST",
        "/product/read-product",
        Some(json!({"code": "1", "type": "ean13"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(body).await;
    assert_eq!(error.error, "UNSUPPORTED_CODE_TYPE");

    let (status, _) = call(
        &app,
        "POST",
        "/product/read-product",
        Some(json!({"code": "404", "type": "qrcode"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_rejects_empty_product() {
    let app = app();
    let (status, body) = call(&app, "POST", "/product/create", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(body).await;
    assert_eq!(error.error, "INVALID_PRODUCT");
}

#[tokio::test]
async fn test_wrong_method_is_not_routed() {
    let app = app();
    let (status, _) = call(&app, "DELETE", "/product/read-product/delete/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
