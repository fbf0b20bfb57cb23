//! # Persistent Store
//!
//! A small key-value store in the style of browser local storage: string keys,
//! string values, synchronous reads and writes. The cart lives under a single
//! fixed key as a JSON array of [`CartItem`]s.
//!
//! - [`KeyValueStore`] - the storage seam
//! - [`FileStore`] - one JSON file on disk holding every key
//! - [`MemoryStore`] - in-process map, for tests
//! - [`CartStorage`] - binds a store to the cart key and (de)serializes the cart

pub mod error;
pub mod file;
pub mod memory;

pub use error::*;
pub use file::*;
pub use memory::*;

use crate::model::{validate_items, CartItem};
use std::sync::Arc;
use tracing::{debug, warn};

/// Key under which the storefront keeps its cart.
pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

/// Synchronous string key-value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The cart's view of a [`KeyValueStore`]: one key, one serialized list.
#[derive(Clone)]
pub struct CartStorage {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl CartStorage {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the persisted cart.
    ///
    /// An absent key yields an empty cart. So does a value that is not a valid
    /// item list (bad JSON, wrong shape, zero amounts, duplicate ids); that case
    /// is logged and the bad value is left in place until the next save.
    /// Only failures of the underlying store are returned as errors.
    pub fn load(&self) -> Result<Vec<CartItem>, StorageError> {
        let Some(raw) = self.store.get(&self.key)? else {
            debug!(key = %self.key, "No persisted cart");
            return Ok(Vec::new());
        };

        let items = match serde_json::from_str::<Vec<CartItem>>(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Persisted cart is malformed, starting empty");
                return Ok(Vec::new());
            }
        };

        if let Err(reason) = validate_items(&items) {
            warn!(key = %self.key, %reason, "Persisted cart is inconsistent, starting empty");
            return Ok(Vec::new());
        }

        debug!(key = %self.key, items = items.len(), "Loaded persisted cart");
        Ok(items)
    }

    /// Overwrites the persisted cart with `items`.
    pub fn save(&self, items: &[CartItem]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        self.store.set(&self.key, &raw)?;
        debug!(key = %self.key, items = items.len(), "Saved cart");
        Ok(())
    }
}

impl std::fmt::Debug for CartStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStorage").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn storage() -> (Arc<MemoryStore>, CartStorage) {
        let store = Arc::new(MemoryStore::new());
        let storage = CartStorage::new(store.clone(), DEFAULT_CART_KEY);
        (store, storage)
    }

    fn item(id: u32, amount: u32) -> CartItem {
        CartItem {
            id: ProductId(id),
            title: "Tênis".to_string(),
            price: 100.0,
            image: "x".to_string(),
            amount,
        }
    }

    #[test]
    fn test_absent_key_loads_empty() {
        let (_, storage) = storage();
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let (store, storage) = storage();
        let items = vec![item(1, 2), item(2, 1)];

        storage.save(&items).unwrap();

        assert_eq!(storage.load().unwrap(), items);
        let raw = store.get(DEFAULT_CART_KEY).unwrap().unwrap();
        assert!(raw.starts_with(r#"[{"id":1,"#));
    }

    #[test]
    fn test_full_precision_prices_survive_save() {
        let (_, storage) = storage();
        let mut items = vec![item(1, 1), item(2, 3)];
        items[0].price = 1175.4621790330661;
        items[1].price = 0.1 + 0.2;

        storage.save(&items).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded, items);
        assert_eq!(loaded[0].price.to_bits(), 1175.4621790330661f64.to_bits());
    }

    #[test]
    fn test_malformed_value_loads_empty() {
        let (store, storage) = storage();
        store.set(DEFAULT_CART_KEY, "{not json").unwrap();
        assert!(storage.load().unwrap().is_empty());

        store.set(DEFAULT_CART_KEY, r#"[{"id":1}]"#).unwrap();
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_inconsistent_value_loads_empty() {
        let (store, storage) = storage();
        let duplicated = serde_json::to_string(&vec![item(1, 1), item(1, 2)]).unwrap();
        store.set(DEFAULT_CART_KEY, &duplicated).unwrap();
        assert!(storage.load().unwrap().is_empty());

        let zero = serde_json::to_string(&vec![item(1, 0)]).unwrap();
        store.set(DEFAULT_CART_KEY, &zero).unwrap();
        assert!(storage.load().unwrap().is_empty());
    }
}
