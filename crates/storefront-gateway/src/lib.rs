//! API Gateway (REST, payload 1.0) proxy integration for the storefront.
//!
//! - [`event`]: proxy event / response payloads and invocation metadata
//! - [`resolver`]: method + path routing with `<param>` segments, CORS and
//!   error rendering
//! - [`handler`]: the Lambda entry point with per-invocation log context
//! - [`products`]: the product API registered on a resolver
//!
//! ```ignore
//! let core = Arc::new(CoreFactory::build_app_core());
//! let handler = product_handler(core, ResolverConfig::default(), HandlerConfig::default())?;
//! let response = handler.handle(event_json, &InvocationContext::local("req-1")).await?;
//! ```

#![deny(unused_crate_dependencies)]

pub mod cors;
pub mod error;
pub mod event;
pub mod handler;
pub mod products;
pub mod reply;
pub mod request;
pub mod resolver;
pub mod route;

pub use cors::CorsConfig;
pub use error::{GatewayError, RouteError, ServiceError};
pub use event::{InvocationContext, ProxyEvent, ProxyResponse};
pub use handler::{DEFAULT_SERVICE_NAME, HandlerConfig, LambdaHandler};
pub use products::{PRODUCT_CREATED_MESSAGE, product_handler, product_resolver};
pub use reply::Reply;
pub use request::{EMPTY_BODY_MESSAGE, GatewayRequest};
pub use resolver::{Resolver, ResolverConfig};
pub use route::RoutePattern;

// Dev-dependency used only by the integration tests
#[cfg(test)]
use storefront_db as _;
