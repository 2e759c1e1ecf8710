//! In-memory implementation of `ProductRepository`.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use storefront_core::{NewProduct, Product, ProductRepository, RepositoryError};

/// Source of candidate product ids.
pub type IdGenerator = Arc<dyn Fn() -> String + Send + Sync>;

/// Attempts made to find an unused id before giving up.
const MAX_ID_ATTEMPTS: usize = 8;

/// Generate a product id of the form `prod_` followed by 8 lowercase hex digits.
pub fn generate_product_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("prod_{}", &hex[..8])
}

/// The demo catalog every fresh repository starts with.
pub fn seed_catalog() -> Vec<Product> {
    vec![
        Product::new("prod1", "Laptop", 1200),
        Product::new("prod2", "Mouse", 25),
        Product::new("prod3", "Keyboard", 75),
    ]
}

/// Product repository backed by a `Vec` behind an async `RwLock`.
///
/// Insertion order is preserved so listings are stable.
pub struct MemoryProductRepository {
    products: RwLock<Vec<Product>>,
    next_id: IdGenerator,
}

impl MemoryProductRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Create a repository pre-populated with [`seed_catalog`].
    pub fn seeded() -> Self {
        Self::with_products(seed_catalog())
    }

    /// Create a repository holding the given products.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
            next_id: Arc::new(generate_product_id),
        }
    }

    /// Replace the id generator (useful for deterministic tests).
    #[must_use]
    pub fn with_id_generator(mut self, next_id: IdGenerator) -> Self {
        self.next_id = next_id;
        self
    }
}

impl Default for MemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Product, RepositoryError> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Product {id}")))
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        // Hold the write lock across id selection so two inserts can't race
        // onto the same id.
        let mut products = self.products.write().await;

        for _ in 0..MAX_ID_ATTEMPTS {
            let id = (self.next_id)();
            if products.iter().any(|p| p.id == id) {
                debug!(%id, "Generated product id already taken, retrying");
                continue;
            }
            let stored = product.clone().with_id(id);
            products.push(stored.clone());
            return Ok(stored);
        }

        Err(RepositoryError::Storage(format!(
            "no unused product id after {MAX_ID_ATTEMPTS} attempts"
        )))
    }
}
