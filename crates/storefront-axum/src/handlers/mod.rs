//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `AppCore` or the shared
//! `LambdaHandler`.

pub mod invoke;
pub mod products;
