//! # Stock Service
//!
//! The cart reads two things from the storefront API: how many units of a product
//! are available, and the product's display metadata. [`Catalog`] is the seam the
//! cart actor depends on; [`HttpCatalog`] talks to the real service and
//! [`MemoryCatalog`] serves fixed data in tests and demos.

pub mod error;
pub mod http;
pub mod memory;

pub use error::*;
pub use http::*;
pub use memory::*;

use crate::model::{ProductId, ProductInfo, Stock};
use async_trait::async_trait;

/// Read-only access to stock levels and product metadata.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// `GET /stock/{id}`.
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError>;

    /// `GET /products/{id}`.
    async fn product(&self, id: ProductId) -> Result<ProductInfo, CatalogError>;
}
