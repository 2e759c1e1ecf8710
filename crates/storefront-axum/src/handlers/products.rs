//! Product handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use storefront_core::Product;
use storefront_gateway::{EMPTY_BODY_MESSAGE, PRODUCT_CREATED_MESSAGE};
use tracing::error;

use crate::error::HttpError;
use crate::state::AppState;

/// List all products.
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, HttpError> {
    let products = state.core.products().list().await?;
    Ok(Json(json!({ "products": products })))
}

/// Get a single product by id.
pub async fn get(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, HttpError> {
    Ok(Json(state.core.products().get(&product_id).await?))
}

/// Create a product from a JSON body.
///
/// The body is read raw so that a missing body and malformed JSON produce
/// the same errors as the proxy resolver.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), HttpError> {
    let payload = parse_payload(&body)?;
    let product = state.core.products().create(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": PRODUCT_CREATED_MESSAGE,
            "product": product,
        })),
    ))
}

fn parse_payload(body: &[u8]) -> Result<Value, HttpError> {
    if body.trim_ascii().is_empty() {
        return Err(HttpError::BadRequest(format!(
            "An unexpected error occurred: {EMPTY_BODY_MESSAGE}"
        )));
    }
    serde_json::from_slice(body).map_err(|e| {
        error!(error = %e, "Error processing create product request.");
        HttpError::BadRequest(format!(
            "An unexpected error occurred: Invalid JSON body: {e}"
        ))
    })
}
