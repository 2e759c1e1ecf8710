//! Axum web server adapter for the storefront.
//!
//! Serves the product API natively over HTTP and exposes a local
//! Lambda-style invoke endpoint that runs proxy events through the same
//! resolver the Lambda deployment uses.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for the integration tests
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::{LAMBDA_INVOKE_PATH, create_router};
pub use state::AppState;
