//! # Cart Client
//!
//! The handle the rest of the application holds to read and change the cart.
//! It wraps a `ResourceClient<Cart>` bound to one cart id and turns framework
//! replies back into [`CartError`]s, so callers can tell a stock rejection
//! apart from a transport or storage failure.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cart, CartId, CartItem, ProductId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    cart_id: CartId,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>, cart_id: CartId) -> Self {
        Self { inner, cart_id }
    }

    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }

    /// Current items, in the order they were added.
    #[instrument(skip(self))]
    pub async fn cart(&self) -> Result<Vec<CartItem>, CartError> {
        debug!("Fetching cart");
        self.get(self.cart_id)
            .await?
            .map(|cart| cart.items)
            .ok_or_else(|| {
                CartError::ActorCommunicationError(format!("{} not found", self.cart_id))
            })
    }

    /// Adds one unit of `product_id`, inserting the product when absent.
    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<CartItem, CartError> {
        debug!("Sending request");
        match self.act(CartAction::AddProduct(product_id)).await? {
            CartActionResult::AddProduct(item) => Ok(item),
            _ => unreachable!("AddProduct action must return AddProduct result"),
        }
    }

    /// Removes the line for `product_id`.
    #[instrument(skip(self))]
    pub async fn remove_product(&self, product_id: ProductId) -> Result<CartItem, CartError> {
        debug!("Sending request");
        match self.act(CartAction::RemoveProduct(product_id)).await? {
            CartActionResult::RemoveProduct(item) => Ok(item),
            _ => unreachable!("RemoveProduct action must return RemoveProduct result"),
        }
    }

    /// Sets the quantity held for `product_id`.
    ///
    /// Returns `Ok(None)` without contacting the stock service when `amount <= 0`.
    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<Option<CartItem>, CartError> {
        debug!("Sending request");
        let action = CartAction::UpdateProductAmount { product_id, amount };
        match self.act(action).await? {
            CartActionResult::UpdateProductAmount(item) => Ok(item),
            _ => unreachable!("UpdateProductAmount action must return UpdateProductAmount result"),
        }
    }

    async fn act(&self, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(self.cart_id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<CartError>()
            .unwrap_or_else(|e| CartError::ActorCommunicationError(e.to_string()))
    }
}
