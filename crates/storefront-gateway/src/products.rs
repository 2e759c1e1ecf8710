//! The product API routes.
//!
//! | Method | Path                     | Success                       |
//! |--------|--------------------------|-------------------------------|
//! | GET    | `/products`              | 200 `{"products": [...]}`     |
//! | GET    | `/products/<product_id>` | 200 product                   |
//! | POST   | `/products`              | 201 `{"message", "product"}`  |

use serde_json::json;
use std::sync::Arc;
use storefront_core::AppCore;
use tracing::error;

use crate::error::{RouteError, ServiceError};
use crate::handler::{HandlerConfig, LambdaHandler};
use crate::reply::Reply;
use crate::request::GatewayRequest;
use crate::resolver::{Resolver, ResolverConfig};

/// Message returned alongside a newly created product.
pub const PRODUCT_CREATED_MESSAGE: &str = "Product created successfully";

/// Build a resolver with the product routes registered.
pub fn product_resolver(core: Arc<AppCore>, config: ResolverConfig) -> Result<Resolver, RouteError> {
    let mut resolver = Resolver::new(config);

    let list_core = Arc::clone(&core);
    let get_core = Arc::clone(&core);
    let create_core = core;

    resolver
        .get("/products", move |req| list_products(Arc::clone(&list_core), req))?
        .get("/products/<product_id>", move |req| {
            get_product(Arc::clone(&get_core), req)
        })?
        .post("/products", move |req| {
            create_product(Arc::clone(&create_core), req)
        })?;

    Ok(resolver)
}

/// Build the full Lambda handler for the product API.
pub fn product_handler(
    core: Arc<AppCore>,
    resolver_config: ResolverConfig,
    handler_config: HandlerConfig,
) -> Result<LambdaHandler, RouteError> {
    Ok(LambdaHandler::new(
        product_resolver(core, resolver_config)?,
        handler_config,
    ))
}

async fn list_products(core: Arc<AppCore>, _req: GatewayRequest) -> Result<Reply, ServiceError> {
    let products = core.products().list().await?;
    Ok(Reply::json(json!({ "products": products })))
}

async fn get_product(core: Arc<AppCore>, req: GatewayRequest) -> Result<Reply, ServiceError> {
    let product_id = req
        .path_param("product_id")
        .ok_or_else(|| ServiceError::BadRequest("Missing product_id".to_string()))?;
    let product = core.products().get(product_id).await?;
    Ok(Reply::json(json!(product)))
}

async fn create_product(core: Arc<AppCore>, req: GatewayRequest) -> Result<Reply, ServiceError> {
    let payload = req.json_body().map_err(|e| {
        error!(error = %e, "Error processing create product request.");
        ServiceError::BadRequest(format!("An unexpected error occurred: {}", e.message()))
    })?;
    let product = core.products().create(&payload).await?;
    Ok(Reply::created(json!({
        "message": PRODUCT_CREATED_MESSAGE,
        "product": product,
    })))
}
