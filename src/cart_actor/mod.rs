//! # Cart Actor
//!
//! The cart is a single [`Cart`] entity owned by a
//! [`ResourceActor`](crate::framework::ResourceActor). Every mutation is a
//! [`CartAction`] processed on the actor's queue, so mutations never overlap,
//! even while one of them is waiting on the stock service.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Cart`]
//!   and the [`CartContext`] it runs with
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`new()`] - Factory function that creates the actor and its generic client
//!
//! ## Usage
//!
//! ```rust
//! use rocket_cart::cart_actor::{self, CartContext};
//! use rocket_cart::catalog::MemoryCatalog;
//! use rocket_cart::clients::CartClient;
//! use rocket_cart::model::{CartCreate, ProductId, ProductInfo};
//! use rocket_cart::storage::{CartStorage, MemoryStore, DEFAULT_CART_KEY};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = MemoryCatalog::new().with_product(
//!         ProductInfo { id: ProductId(1), title: "Tênis".into(), price: 100.0, image: "x".into() },
//!         5,
//!     );
//!     let storage = CartStorage::new(Arc::new(MemoryStore::new()), DEFAULT_CART_KEY);
//!
//!     let (actor, generic_client) = cart_actor::new(32);
//!     tokio::spawn(actor.run(CartContext::new(Arc::new(catalog), storage)));
//!
//!     let cart_id = generic_client.create(CartCreate { items: vec![] }).await?;
//!     let client = CartClient::new(generic_client, cart_id);
//!
//!     client.add_product(ProductId(1)).await?;
//!     assert_eq!(client.cart().await?[0].amount, 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::CartContext;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Cart;

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(buffer_size)
}
