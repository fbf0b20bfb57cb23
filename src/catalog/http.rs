//! `reqwest` implementation of [`Catalog`].

use crate::catalog::{Catalog, CatalogError};
use crate::model::{ProductId, ProductInfo, Stock};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for the storefront's REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: Url,
    client: Client,
}

impl HttpCatalog {
    /// Builds a client rooted at `base_url`. Every request fails after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| CatalogError::InvalidUrl(format!("{base_url}: {e}")))?;
        // Url::join replaces the last segment unless the base path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| CatalogError::InvalidUrl(format!("{path}: {e}")))?;

        debug!(%url, "GET");
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!(status = %response.status(), "Response");

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    #[instrument(skip(self))]
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        self.fetch(&format!("stock/{}", id.0)).await
    }

    #[instrument(skip(self))]
    async fn product(&self, id: ProductId) -> Result<ProductInfo, CatalogError> {
        self.fetch(&format!("products/{}", id.0)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn catalog_for(server: &MockServer) -> HttpCatalog {
        HttpCatalog::new(&server.base_url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_stock_parses_response() {
        let server = MockServer::start_async().await;
        let stock_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/stock/1");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!({"id": 1, "amount": 5}));
            })
            .await;

        let stock = catalog_for(&server).stock(ProductId(1)).await.unwrap();

        stock_mock.assert_async().await;
        assert_eq!(
            stock,
            Stock {
                id: ProductId(1),
                amount: 5
            }
        );
    }

    #[tokio::test]
    async fn test_product_parses_response() {
        let server = MockServer::start_async().await;
        let product_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/products/1");
                then.status(200).json_body(serde_json::json!({
                    "id": 1,
                    "title": "Tênis de Caminhada Leve Confortável",
                    "price": 179.9,
                    "image": "https://example.com/tenis1.jpg"
                }));
            })
            .await;

        let product = catalog_for(&server).product(ProductId(1)).await.unwrap();

        product_mock.assert_async().await;
        assert_eq!(product.title, "Tênis de Caminhada Leve Confortável");
        assert_eq!(product.price, 179.9);
    }

    #[tokio::test]
    async fn test_error_status_is_request_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/stock/7");
                then.status(404);
            })
            .await;

        let result = catalog_for(&server).stock(ProductId(7)).await;
        assert!(matches!(result, Err(CatalogError::Request(_))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_request_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/stock/1");
                then.status(200).body("not json");
            })
            .await;

        let result = catalog_for(&server).stock(ProductId(1)).await;
        assert!(matches!(result, Err(CatalogError::Request(_))));
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let catalog = HttpCatalog::new("http://localhost:3333/api", Duration::from_secs(1)).unwrap();
        assert_eq!(catalog.base_url().as_str(), "http://localhost:3333/api/");
        assert_eq!(
            catalog.base_url().join("stock/2").unwrap().as_str(),
            "http://localhost:3333/api/stock/2"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpCatalog::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(CatalogError::InvalidUrl(_))));
    }
}
