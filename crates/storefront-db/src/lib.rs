//! Storage adapters for the storefront.
//!
//! Implements the repository ports from `storefront-core`. The catalog is
//! held in process memory and seeded with the demo products on startup.

#![deny(unused_crate_dependencies)]

pub mod factory;
pub mod repositories;

pub use factory::CoreFactory;
pub use repositories::{IdGenerator, MemoryProductRepository, generate_product_id, seed_catalog};
