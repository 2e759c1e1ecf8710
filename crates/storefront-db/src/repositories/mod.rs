//! Repository implementations.

mod memory_product_repository;

pub use memory_product_repository::{
    IdGenerator, MemoryProductRepository, generate_product_id, seed_catalog,
};
