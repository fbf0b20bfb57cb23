use clap::Parser;
use httpmock::prelude::*;
use rocket_cart::cart_actor::CartError;
use rocket_cart::config::CartConfig;
use rocket_cart::lifecycle::CartSystem;
use rocket_cart::model::ProductId;
use rocket_cart::storage::{FileStore, KeyValueStore, DEFAULT_CART_KEY};
use serde_json::json;
use tempfile::TempDir;

fn config_for(server: &MockServer, dir: &TempDir) -> CartConfig {
    let api_url = server.base_url();
    let storage_path = dir.path().join("cart.json");
    CartConfig::try_parse_from([
        "rocket-cart",
        "--api-url",
        api_url.as_str(),
        "--storage-path",
        storage_path.to_str().unwrap(),
        "--request-timeout-secs",
        "2",
    ])
    .unwrap()
}

/// The full system against a mocked stock service and a cart file on disk.
#[tokio::test]
async fn test_http_cart_with_file_store() {
    let server = MockServer::start_async().await;
    let stock_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/stock/1");
            then.status(200).json_body(json!({"id": 1, "amount": 2}));
        })
        .await;
    let product_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/products/1");
            then.status(200).json_body(json!({
                "id": 1,
                "title": "Tênis de Caminhada Leve Confortável",
                "price": 179.9,
                "image": "https://example.com/tenis1.jpg"
            }));
        })
        .await;
    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);

    let system = CartSystem::start(&config).await.expect("Failed to start");
    let cart = &system.cart_client;
    assert!(cart.cart().await.unwrap().is_empty());

    cart.add_product(ProductId(1)).await.expect("First add failed");
    cart.add_product(ProductId(1)).await.expect("Second add failed");
    let result = cart.add_product(ProductId(1)).await;
    assert!(matches!(result, Err(CartError::StockExceeded { requested: 3, available: 2, .. })));

    stock_mock.assert_hits_async(3).await;
    // Metadata is only fetched when the line is first inserted
    product_mock.assert_hits_async(1).await;
    system.shutdown().await.unwrap();

    // The file holds the cart under the configured key
    let raw = FileStore::new(dir.path().join("cart.json"))
        .get(DEFAULT_CART_KEY)
        .unwrap()
        .expect("Cart not persisted");
    let items: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["amount"], 2);

    // And it is loaded again on the next start
    let system = CartSystem::start(&config).await.expect("Failed to restart");
    let items = system.cart_client.cart().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].amount, 2);
    assert_eq!(items[0].title, "Tênis de Caminhada Leve Confortável");
    system.shutdown().await.unwrap();
}

/// A failing stock service is a transport error and leaves the cart alone.
#[tokio::test]
async fn test_stock_service_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/stock/1");
            then.status(500);
        })
        .await;
    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);

    let system = CartSystem::start(&config).await.unwrap();
    let result = system.cart_client.add_product(ProductId(1)).await;

    assert!(matches!(result, Err(CartError::Transport(_))));
    assert!(system.cart_client.cart().await.unwrap().is_empty());
    assert!(!dir.path().join("cart.json").exists());
    system.shutdown().await.unwrap();
}
