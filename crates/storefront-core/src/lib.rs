//! Core domain types, ports, and services for the storefront products API.
//!
//! This crate knows nothing about HTTP, API Gateway events, or storage
//! backends. Adapters (`storefront-gateway`, `storefront-axum`) receive an
//! [`AppCore`] and map [`CoreError`] onto their own error surfaces.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{INVALID_PRODUCT_MESSAGE, NewProduct, Product};
pub use ports::{CoreError, ProductRepository, Repos, RepositoryError};
pub use services::{AppCore, ProductService};

#[cfg(test)]
use tokio as _;
