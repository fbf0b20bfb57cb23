use crate::cart_actor::{self, CartContext, CartError};
use crate::catalog::{Catalog, CatalogError, HttpCatalog};
use crate::clients::CartClient;
use crate::config::{CartConfig, ConfigError};
use crate::model::CartCreate;
use crate::storage::{CartStorage, FileStore, StorageError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Failures while bringing the cart up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Stock service unavailable: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Could not read persisted cart: {0}")]
    Storage(#[from] StorageError),
    #[error("Could not create cart: {0}")]
    Cart(#[from] CartError),
}

/// The running cart: one actor task plus the client that talks to it.
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::start(&config).await?;
///
/// system.cart_client.add_product(ProductId(1)).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for the cart actor. Clone it to share across tasks.
    pub cart_client: CartClient,

    handle: tokio::task::JoinHandle<()>,
}

impl CartSystem {
    /// Starts the cart against the HTTP stock service and file store named in `config`.
    pub async fn start(config: &CartConfig) -> Result<Self, StartupError> {
        config.validate()?;

        let catalog = HttpCatalog::new(&config.api_url, config.request_timeout())?;
        let store = FileStore::new(&config.storage_path);
        info!(
            api_url = %catalog.base_url(),
            storage_path = %store.path().display(),
            "Starting cart"
        );
        let storage = CartStorage::new(Arc::new(store), config.storage_key.clone());
        Self::with_parts(Arc::new(catalog), storage, config.buffer_size).await
    }

    /// Starts the cart with explicit dependencies.
    ///
    /// This method:
    /// 1. Loads the persisted items (corrupt values load as an empty cart)
    /// 2. Spawns the cart actor with the catalog and storage as its context
    /// 3. Creates the cart entity seeded with the loaded items
    pub async fn with_parts(
        catalog: Arc<dyn Catalog>,
        storage: CartStorage,
        buffer_size: usize,
    ) -> Result<Self, StartupError> {
        let items = storage.load()?;
        info!(items = items.len(), key = %storage.key(), "Loaded cart");

        let (actor, generic_client) = cart_actor::new(buffer_size);
        let handle = tokio::spawn(actor.run(CartContext::new(catalog, storage)));

        let cart_id = generic_client
            .create(CartCreate { items })
            .await
            .map_err(|e| {
                e.into_entity_error::<CartError>()
                    .unwrap_or_else(|e| CartError::ActorCommunicationError(e.to_string()))
            })?;

        let cart_client = CartClient::new(generic_client, cart_id);
        info!(cart_id = %cart_client.cart_id(), "Cart ready");
        Ok(Self {
            cart_client,
            handle,
        })
    }

    /// Gracefully shuts down the cart actor.
    ///
    /// Dropping the client closes the actor's channel; the actor finishes the
    /// requests already queued and exits. Outstanding clones of the client keep
    /// the actor alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart...");
        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Cart actor task failed: {:?}", e);
            return Err(format!("Cart actor task failed: {:?}", e));
        }

        info!("Cart shutdown complete.");
        Ok(())
    }
}
