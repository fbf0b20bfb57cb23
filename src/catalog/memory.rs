//! In-process [`Catalog`] with fixed products.

use crate::catalog::{Catalog, CatalogError};
use crate::model::{ProductId, ProductInfo, Stock};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Catalog backed by a map, for tests and offline demos.
///
/// Stock levels can be changed while the catalog is shared, and every lookup can
/// be slowed down to widen the window in which concurrent requests overlap.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    products: Mutex<HashMap<ProductId, (ProductInfo, u32)>>,
    latency: Option<Duration>,
    stock_lookups: AtomicUsize,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a product with `stock` units available.
    pub fn with_product(self, product: ProductInfo, stock: u32) -> Self {
        self.products().insert(product.id, (product, stock));
        self
    }

    /// Delays every lookup by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Changes the available quantity of a known product.
    pub fn set_stock(&self, id: ProductId, amount: u32) {
        if let Some((_, stock)) = self.products().get_mut(&id) {
            *stock = amount;
        }
    }

    /// Number of `stock` calls served so far.
    pub fn stock_lookups(&self) -> usize {
        self.stock_lookups.load(Ordering::SeqCst)
    }

    fn products(&self) -> MutexGuard<'_, HashMap<ProductId, (ProductInfo, u32)>> {
        self.products.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn wait(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        self.stock_lookups.fetch_add(1, Ordering::SeqCst);
        self.wait().await;
        let amount = self
            .products()
            .get(&id)
            .map(|(_, amount)| *amount)
            .ok_or(CatalogError::UnknownProduct(id))?;
        Ok(Stock { id, amount })
    }

    async fn product(&self, id: ProductId) -> Result<ProductInfo, CatalogError> {
        self.wait().await;
        self.products()
            .get(&id)
            .map(|(product, _)| product.clone())
            .ok_or(CatalogError::UnknownProduct(id))
    }
}
