//! Product repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewProduct, Product};

/// Repository for product persistence operations.
///
/// Implementations own id assignment: `insert` returns the stored product
/// with an id that no other product in the repository carries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products in insertion order.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Get a product by its id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the product doesn't exist.
    async fn get_by_id(&self, id: &str) -> Result<Product, RepositoryError>;

    /// Insert a new product, returning it with its assigned id.
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
}
