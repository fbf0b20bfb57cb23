//! [`ActorEntity`] implementation for [`Cart`].
//!
//! Each action works on a copy of the item list. The copy is persisted first and
//! only then swapped into the entity, so a rejected or failed action leaves both
//! memory and storage as they were.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::catalog::Catalog;
use crate::framework::ActorEntity;
use crate::model::{validate_items, Cart, CartCreate, CartId, CartItem, ProductId};
use crate::storage::CartStorage;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Dependencies injected into the cart actor when it starts.
#[derive(Clone)]
pub struct CartContext {
    pub catalog: Arc<dyn Catalog>,
    pub storage: CartStorage,
}

impl CartContext {
    pub fn new(catalog: Arc<dyn Catalog>, storage: CartStorage) -> Self {
        Self { catalog, storage }
    }
}

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = CartContext;
    type Error = CartError;

    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, Self::Error> {
        validate_items(&params.items).map_err(CartError::InvalidItems)?;
        Ok(Cart::new(id, params.items))
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::AddProduct(product_id) => self
                .add_product(product_id, ctx)
                .await
                .map(CartActionResult::AddProduct),
            CartAction::RemoveProduct(product_id) => self
                .remove_product(product_id, ctx)
                .map(CartActionResult::RemoveProduct),
            CartAction::UpdateProductAmount { product_id, amount } => self
                .update_product_amount(product_id, amount, ctx)
                .await
                .map(CartActionResult::UpdateProductAmount),
        }
    }
}

impl Cart {
    async fn add_product(
        &mut self,
        product_id: ProductId,
        ctx: &CartContext,
    ) -> Result<CartItem, CartError> {
        let stock = ctx.catalog.stock(product_id).await?;
        let held = self.amount_of(product_id);
        let desired = held.checked_add(1).ok_or(CartError::StockExceeded {
            product_id,
            requested: u32::MAX,
            available: stock.amount,
        })?;
        if desired > stock.amount {
            return Err(CartError::StockExceeded {
                product_id,
                requested: desired,
                available: stock.amount,
            });
        }

        let mut next = self.items.clone();
        let item = match next.iter().position(|item| item.id == product_id) {
            Some(index) => {
                next[index].amount = desired;
                next[index].clone()
            }
            None => {
                let product = ctx.catalog.product(product_id).await?;
                let mut item = CartItem::new(product, 1);
                // Key the line by the requested id whatever the service echoed back.
                item.id = product_id;
                next.push(item.clone());
                item
            }
        };

        self.commit(next, ctx)?;
        info!(%product_id, amount = item.amount, "Product added");
        Ok(item)
    }

    fn remove_product(
        &mut self,
        product_id: ProductId,
        ctx: &CartContext,
    ) -> Result<CartItem, CartError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == product_id)
            .ok_or(CartError::NotFound(product_id))?;

        let mut next = self.items.clone();
        let removed = next.remove(index);

        self.commit(next, ctx)?;
        info!(%product_id, "Product removed");
        Ok(removed)
    }

    async fn update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
        ctx: &CartContext,
    ) -> Result<Option<CartItem>, CartError> {
        if amount <= 0 {
            debug!(%product_id, amount, "Ignoring non-positive amount");
            return Ok(None);
        }

        let stock = ctx.catalog.stock(product_id).await?;
        let requested = u32::try_from(amount).map_err(|_| CartError::StockExceeded {
            product_id,
            requested: u32::MAX,
            available: stock.amount,
        })?;
        if requested > stock.amount {
            return Err(CartError::StockExceeded {
                product_id,
                requested,
                available: stock.amount,
            });
        }

        let index = self
            .items
            .iter()
            .position(|item| item.id == product_id)
            .ok_or(CartError::NotFound(product_id))?;

        let mut next = self.items.clone();
        next[index].amount = requested;
        let item = next[index].clone();

        self.commit(next, ctx)?;
        info!(%product_id, amount = requested, "Product amount updated");
        Ok(Some(item))
    }

    fn commit(&mut self, next: Vec<CartItem>, ctx: &CartContext) -> Result<(), CartError> {
        ctx.storage.save(&next)?;
        self.items = next;
        Ok(())
    }
}
