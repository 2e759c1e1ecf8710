//! `AppCore` - the primary application facade.
//!
//! Adapters (API Gateway resolver, HTTP server, CLI) receive an `AppCore`
//! instance and use it to access all functionality.

use crate::ports::Repos;

use super::ProductService;

/// The core application facade.
///
/// Constructed at the adapter's composition root with concrete repository
/// implementations.
///
/// # Example
///
/// ```ignore
/// let repos = Repos::new(Arc::new(MemoryProductRepository::seeded()));
/// let core = AppCore::new(repos);
///
/// let products = core.products().list().await?;
/// ```
pub struct AppCore {
    products: ProductService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            products: ProductService::new(repos.products),
        }
    }

    /// Access the product service.
    pub const fn products(&self) -> &ProductService {
        &self.products
    }
}
