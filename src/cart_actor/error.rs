//! Error types for the Cart actor.

use crate::catalog::CatalogError;
use crate::model::ProductId;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Every variant leaves the cart unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    StockExceeded {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// The product is not in the cart.
    #[error("Product not in cart: {0}")]
    NotFound(ProductId),

    /// The stock service could not be reached or answered with unusable data.
    #[error("Stock service error: {0}")]
    Transport(String),

    /// The cart could not be written to the persistent store.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Items handed to a new cart break the cart invariants.
    #[error("Invalid cart items: {0}")]
    InvalidItems(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    pub fn is_stock_exceeded(&self) -> bool {
        matches!(self, CartError::StockExceeded { .. })
    }
}

impl From<CatalogError> for CartError {
    fn from(e: CatalogError) -> Self {
        CartError::Transport(e.to_string())
    }
}

impl From<StorageError> for CartError {
    fn from(e: StorageError) -> Self {
        CartError::Storage(e.to_string())
    }
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
