//! Core services.
//!
//! Services orchestrate ports; they hold no infrastructure details.

mod app_core;
mod product_service;

pub use app_core::AppCore;
pub use product_service::ProductService;
