//! The cart entity.

use crate::model::{CartItem, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// The shopping cart.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// so it is owned by a [`ResourceActor`](crate::framework::ResourceActor) and only
/// mutated through [`CartAction`](crate::cart_actor::CartAction)s.
///
/// Items keep insertion order and are unique by product id.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub items: Vec<CartItem>,
}

/// Payload for creating a cart, typically the items restored from storage.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(id: CartId, items: Vec<CartItem>) -> Self {
        Self { id, items }
    }

    /// Returns the line item for `product_id`, if present.
    pub fn item(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    /// Quantity currently held for `product_id`, zero when absent.
    pub fn amount_of(&self, product_id: ProductId) -> u32 {
        self.item(product_id).map_or(0, |item| item.amount)
    }

    /// Sum of every line's subtotal.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}

/// Checks that ids are unique and every amount is at least one.
pub fn validate_items(items: &[CartItem]) -> Result<(), String> {
    let mut seen = std::collections::HashSet::new();
    for item in items {
        if item.amount == 0 {
            return Err(format!("{} has amount 0", item.id));
        }
        if !seen.insert(item.id) {
            return Err(format!("{} appears more than once", item.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, price: f64, amount: u32) -> CartItem {
        CartItem {
            id: ProductId(id),
            title: format!("Product {}", id),
            price,
            image: format!("{}.jpg", id),
            amount,
        }
    }

    #[test]
    fn test_lookup_and_total() {
        let cart = Cart::new(CartId(1), vec![item(1, 100.0, 2), item(2, 50.0, 1)]);
        assert_eq!(cart.amount_of(ProductId(1)), 2);
        assert_eq!(cart.amount_of(ProductId(9)), 0);
        assert_eq!(cart.total(), 250.0);
    }

    #[test]
    fn test_validate_items() {
        assert!(validate_items(&[item(1, 1.0, 1), item(2, 1.0, 3)]).is_ok());
        assert!(validate_items(&[item(1, 1.0, 0)]).is_err());
        assert!(validate_items(&[item(1, 1.0, 1), item(1, 1.0, 2)]).is_err());
    }
}
