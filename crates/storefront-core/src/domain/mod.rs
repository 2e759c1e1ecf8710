//! Domain types for the storefront.
//!
//! Pure data types with no infrastructure dependencies.

mod product;

pub use product::{INVALID_PRODUCT_MESSAGE, NewProduct, Product};
