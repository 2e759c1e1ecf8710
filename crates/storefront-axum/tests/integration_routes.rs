//! Integration tests for the Axum web server.
//!
//! These tests verify that routes are correctly wired to handlers.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use storefront_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap};
use storefront_axum::routes::{LAMBDA_INVOKE_PATH, create_router};

fn app() -> Router {
    let config = ServerConfig::with_defaults();
    let ctx = bootstrap(&config).expect("bootstrap");
    create_router(ctx, &CorsConfig::AllowAll)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("JSON body")
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn products_endpoint_lists_seeded_catalog() {
    let (status, body) = send(app(), get("/products")).await;
    assert_eq!(status, StatusCode::OK);

    let body = json(&body);
    let names: Vec<&str> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Laptop", "Mouse", "Keyboard"]);
}

#[tokio::test]
async fn product_endpoint_returns_single_product() {
    let (status, body) = send(app(), get("/products/prod2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body), json!({"id": "prod2", "name": "Mouse", "price": 25}));
}

#[tokio::test]
async fn unknown_product_returns_404_with_message() {
    let (status, body) = send(app(), get("/products/missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json(&body),
        json!({"statusCode": 404, "message": "Product with ID 'missing' not found."})
    );
}

#[tokio::test]
async fn create_product_returns_201_and_is_persisted() {
    let app = app();
    let (status, body) = send(
        app.clone(),
        post("/products", r#"{"name":"Webcam","price":59}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let body = json(&body);
    assert_eq!(body["message"], "Product created successfully");
    let id = body["product"]["id"].as_str().unwrap().to_string();

    let (status, fetched) = send(app, get(&format!("/products/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&fetched)["name"], "Webcam");
}

#[tokio::test]
async fn create_product_rejects_invalid_payloads() {
    let (status, body) = send(app(), post("/products", r#"{"name":"Webcam"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json(&body)["message"],
        "Invalid product data. 'name' and 'price' are required."
    );

    let (status, body) = send(app(), post("/products", "{oops")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json(&body)["message"]
            .as_str()
            .unwrap()
            .starts_with("An unexpected error occurred:")
    );
}

#[tokio::test]
async fn invoke_endpoint_resolves_proxy_event() {
    let event = json!({
        "httpMethod": "GET",
        "path": "/products/prod1",
        "pathParameters": {"product_id": "prod1"},
        "requestContext": {"elb": {"targetGroupArn": "xxx"}},
        "headers": {},
        "body": null,
    });
    let (status, body) = send(app(), post(LAMBDA_INVOKE_PATH, event.to_string())).await;
    assert_eq!(status, StatusCode::OK);

    let response = json(&body);
    assert_eq!(response["statusCode"], 200);
    let inner: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(inner["name"], "Laptop");
}

#[tokio::test]
async fn invoke_endpoint_rejects_malformed_event() {
    let (status, body) = send(app(), post(LAMBDA_INVOKE_PATH, r#"{"foo": 1}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json(&body)["message"]
            .as_str()
            .unwrap()
            .starts_with("Malformed proxy event")
    );
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (status, body) = send(app(), get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json(&body), json!({"statusCode": 404, "message": "Not found"}));
}

#[tokio::test]
async fn unsupported_method_returns_404_like_the_resolver() {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/products/prod1")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json(&body), json!({"statusCode": 404, "message": "Not found"}));
}

#[tokio::test]
async fn create_product_rejects_empty_body() {
    let (status, body) = send(app(), post("/products", "")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json(&body),
        json!({
            "statusCode": 400,
            "message": "An unexpected error occurred: request body is empty",
        })
    );
}

#[tokio::test]
async fn invoke_endpoint_accepts_body_without_content_type() {
    let event = json!({"httpMethod": "GET", "path": "/products", "body": null});
    let request = Request::builder()
        .method(Method::POST)
        .uri(LAMBDA_INVOKE_PATH)
        .body(Body::from(event.to_string()))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["statusCode"], 200);
}

#[tokio::test]
async fn invoke_endpoint_rejects_invalid_json_with_error_body() {
    let (status, body) = send(app(), post(LAMBDA_INVOKE_PATH, "{bad")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let body = json(&body);
    assert_eq!(body["statusCode"], 400);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid invocation payload")
    );
}

#[tokio::test]
async fn cors_headers_present_for_allow_all() {
    let request = Request::builder()
        .uri("/products")
        .header("origin", "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
