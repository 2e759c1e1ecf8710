//! Route definitions and router construction.
//!
//! The product endpoints live at the same paths they have behind API
//! Gateway, so a client can point at either deployment unchanged.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::error::HttpError;
use crate::handlers;
use crate::state::AppState;

/// Invoke path used by the Lambda runtime interface emulator.
pub const LAMBDA_INVOKE_PATH: &str = "/2015-03-31/functions/function/invocations";

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Product API routes, without state applied.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handlers::products::list).post(handlers::products::create),
        )
        .route("/products/{product_id}", get(handlers::products::get))
        .route(LAMBDA_INVOKE_PATH, post(handlers::invoke::invoke))
}

/// Create the main Axum router.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{product_id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes().with_state(state))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Unknown paths and unsupported methods answer like the proxy resolver.
async fn not_found() -> HttpError {
    HttpError::NotFound("Not found".to_string())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
