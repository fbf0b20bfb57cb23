//! Error types for the stock service.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur while talking to the stock service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request failed, timed out, returned a non-success status, or had an unexpected body.
    #[error("Stock service request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The configured base URL cannot be joined with a request path.
    #[error("Invalid stock service URL: {0}")]
    InvalidUrl(String),

    /// The service has no record for this product.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}
