//! Product service - the catalog operations behind every adapter.

use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::{NewProduct, Product};
use crate::ports::{CoreError, ProductRepository, RepositoryError};

/// Service for catalog operations.
///
/// Both the API Gateway resolver and the HTTP server call into this type,
/// so validation and not-found messages are identical on every surface.
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Create a new product service with the given repository.
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// List all products.
    pub async fn list(&self) -> Result<Vec<Product>, CoreError> {
        info!("Received request to list products");
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Get a single product by id.
    pub async fn get(&self, id: &str) -> Result<Product, CoreError> {
        info!(product_id = %id, "Received request to get product with ID: {id}");
        match self.repo.get_by_id(id).await {
            Ok(product) => Ok(product),
            Err(RepositoryError::NotFound(_)) => {
                warn!(product_id = %id, "Product with ID {id} not found.");
                Err(RepositoryError::NotFound(format!("Product with ID '{id}' not found.")).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Validate a create payload and persist the product.
    pub async fn create(&self, payload: &Value) -> Result<Product, CoreError> {
        info!("Received request to create a new product");
        let draft = NewProduct::from_payload(payload).inspect_err(|e| {
            if payload.is_object() {
                error!("Invalid product data provided for creation.");
            } else {
                error!(error = %e, "Error processing create product request.");
            }
        })?;

        let product = self.repo.insert(&draft).await?;
        info!(
            product_id = %product.id,
            name = %product.name,
            price = %product.price,
            "Created new product"
        );
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::INVALID_PRODUCT_MESSAGE;
    use crate::ports::product_repository::MockProductRepository;
    use serde_json::json;

    fn service(repo: MockProductRepository) -> ProductService {
        ProductService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_list_returns_repository_products() {
        let mut repo = MockProductRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Ok(vec![Product::new("prod1", "Laptop", 1200)]));

        let products = service(repo).list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Laptop");
    }

    #[tokio::test]
    async fn test_get_missing_product_uses_catalog_message() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .withf(|id| id == "nope")
            .returning(|id| Err(RepositoryError::NotFound(id.to_string())));

        let err = service(repo).get("nope").await.unwrap_err();
        match err {
            CoreError::Repository(RepositoryError::NotFound(msg)) => {
                assert_eq!(msg, "Product with ID 'nope' not found.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_passes_storage_errors_through() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::Storage("lock poisoned".to_string())));

        let err = service(repo).get("prod1").await.unwrap_err();
        assert!(matches!(err, CoreError::Repository(RepositoryError::Storage(_))));
    }

    #[tokio::test]
    async fn test_create_persists_valid_payload() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert()
            .withf(|draft| draft.name == "Monitor")
            .times(1)
            .returning(|draft| Ok(draft.clone().with_id("prod_0000abcd")));

        let product = service(repo)
            .create(&json!({"name": "Monitor", "price": 300}))
            .await
            .unwrap();
        assert_eq!(product.id, "prod_0000abcd");
        assert_eq!(product.price, serde_json::Number::from(300));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payload_without_touching_storage() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert().never();

        let err = service(repo)
            .create(&json!({"name": "Monitor"}))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(msg) if msg == INVALID_PRODUCT_MESSAGE));
    }
}
