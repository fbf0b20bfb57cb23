//! Custom actions for the Cart actor.
//!
//! Every change to the cart is one of these actions, handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! on [`Cart`](crate::model::Cart).

use crate::model::{CartItem, ProductId};

/// Mutations the cart accepts.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds one unit of a product, inserting it when absent.
    ///
    /// # Errors
    /// Fails if the resulting quantity exceeds available stock.
    AddProduct(ProductId),
    /// Removes a product line entirely.
    RemoveProduct(ProductId),
    /// Sets the quantity of a product already in the cart.
    ///
    /// Non-positive amounts are ignored without touching the cart.
    UpdateProductAmount { product_id: ProductId, amount: i64 },
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// The added or incremented line.
    AddProduct(CartItem),
    /// The line that was removed.
    RemoveProduct(CartItem),
    /// The updated line, or `None` when the amount was ignored.
    UpdateProductAmount(Option<CartItem>),
}
