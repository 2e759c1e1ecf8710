//! Composition utilities for building `AppCore` with in-memory backends.
//!
//! Construction only; no domain logic lives here.

use std::sync::Arc;

use storefront_core::{AppCore, Repos};

use crate::repositories::MemoryProductRepository;

/// Factory for creating repository instances.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all repositories, seeded with the demo catalog.
    pub fn build_repos() -> Repos {
        Repos::new(Arc::new(MemoryProductRepository::seeded()))
    }

    /// Build a complete `AppCore` over the seeded catalog.
    ///
    /// ```ignore
    /// let core = CoreFactory::build_app_core();
    /// let products = core.products().list().await?;
    /// ```
    pub fn build_app_core() -> AppCore {
        AppCore::new(Self::build_repos())
    }

    /// Build an `AppCore` over an empty catalog.
    pub fn build_empty_app_core() -> AppCore {
        AppCore::new(Repos::new(Arc::new(MemoryProductRepository::new())))
    }
}
